#![no_std]

// cargo build --release --target wasm32-unknown-unknown
// exports: demo_sum, demo_sum_checked

seqsum_sdk::guest_runtime!();
seqsum_sdk::export_demo_sum!();
