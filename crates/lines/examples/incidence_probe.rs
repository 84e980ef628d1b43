//! Prints every relationship between two fixed lines.
//!
//! Run with `cargo run -p lines2d --example incidence_probe`.

use lines2d::prelude::*;

fn main() {
    let l1 = Line::from_coords(1, 1, 4, 4);
    let l2 = Line::from_coords(1, 8, 2, 4);

    println!("l1={l1}");
    println!("l2={l2}");
    println!("len(l1)={:.6} len(l2)={:.6}", l1.length(), l2.length());
    println!("si(l1)={}", l1.slope_intercept());
    println!("si(l2)={}", slope_intercept_of(&l2));
    println!(
        "parallel={} perpendicular={}",
        is_parallel(&l1, &l2),
        is_perpendicular(&l1, &l2)
    );
    match intersect(&l1, &l2) {
        Incidence::Point(p) => println!("incident={p}"),
        Incidence::Parallel => println!("incident=none (parallel)"),
    }
}
