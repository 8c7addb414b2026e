//! Basic usage of the transpose and file helpers.

use raster_support::default::{open, transpose_4x4, transpose_rows, transpose_slice};
use wide::u32x4;

fn main() {
    // Plain array transpose
    println!("=== Array Transpose ===");
    let mut m = [
        [1u32, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 12],
        [13, 14, 15, 16],
    ];
    println!("before: {:?}", m);
    transpose_4x4(&mut m);
    println!("after:  {:?}", m);

    // SIMD rows
    println!("\n=== SIMD Rows ===");
    let rows = [
        u32x4::from([1, 2, 3, 4]),
        u32x4::from([5, 6, 7, 8]),
        u32x4::from([9, 10, 11, 12]),
        u32x4::from([13, 14, 15, 16]),
    ];
    let t = transpose_rows(rows);
    for (i, row) in t.iter().enumerate() {
        println!("row{}: {:?}", i, <[u32; 4]>::from(*row));
    }

    // Batch transpose with runtime CPU dispatch
    println!("\n=== Batch ===");
    let mut batch = vec![rows; 1024];
    transpose_slice(&mut batch);
    println!(
        "transposed {} matrices, first row now {:?}",
        batch.len(),
        <[u32; 4]>::from(batch[0][0])
    );

    // fopen-style file opening
    println!("\n=== File Open ===");
    match open("Cargo.toml", "r") {
        Ok(_) => println!("opened Cargo.toml for reading"),
        Err(e) => println!("open failed: {}", e),
    }
    match open("no-such-file.bin", "r") {
        Ok(_) => println!("unexpectedly opened a missing file"),
        Err(e) => println!("missing file reported as: {}", e),
    }
}
