// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count markers inside districts built from rectangles.
//!
//! This example shows how to combine:
//! - `waymark_index` for exact decimal coordinates and rectangles,
//! - `waymark_region` for overlap-checked regions and their connectivity,
//! - `waymark_points` for per-region marker counts.
//!
//! Run:
//! - `cargo run -p waymark_demos --example region_counts`
//! - `RUST_LOG=debug cargo run -p waymark_demos --example region_counts` to see the
//!   overlap and connectivity diagnostics.

use std::error::Error;

use waymark_index::{Coordinate, Rectangle};
use waymark_points::{InterestPoint, InterestPoints};
use waymark_region::{Adjacency, RectilinearRegion, RegionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Amenity {
    School,
    Park,
    Clinic,
}

fn main() -> Result<(), Box<dyn Error>> {
    waymark_demos::init_logging();

    let mut builder = InterestPoints::builder();
    for (x, y, amenity) in [
        ("0.5", "0.5", Amenity::School),
        ("2", "0", Amenity::School),
        ("2", "0", Amenity::Park),
        ("3.25", "1.75", Amenity::Clinic),
        ("4", "1", Amenity::School),
        ("6", "6", Amenity::Park),
        ("1", "2.5", Amenity::Park),
    ] {
        builder.add(InterestPoint::parse(x, y, amenity)?);
    }
    // Duplicate of an existing point: ignored.
    let added = builder.add(InterestPoint::new(Coordinate::new(2, 0), Amenity::School));
    tracing::info!(added, "re-added school at (2, 0)");
    let points = builder.build();
    println!("{points}");

    // An L-shaped district.
    let district = RectilinearRegion::of([
        Rectangle::from_bounds(0, 0, 2, 2)?,
        Rectangle::from_bounds(2, 0, 4, 2)?,
        Rectangle::from_bounds(0, 2, 1, 3)?,
    ])?;
    println!("district {district}: connected = {}", district.is_connected());
    for amenity in [Amenity::School, Amenity::Park, Amenity::Clinic] {
        println!("  {amenity:?}: {}", points.count(&district, &amenity));
    }
    println!("  all: {}", points.count_all(&district));

    // Two blocks touching at a single corner.
    let diagonal = RectilinearRegion::of([
        Rectangle::from_bounds(0, 0, 1, 1)?,
        Rectangle::from_bounds(1, 1, 2, 2)?,
    ])?;
    println!(
        "diagonal {diagonal}: connected = {}, edge-connected = {}",
        diagonal.is_connected(),
        diagonal.is_connected_with(Adjacency::edges_only()),
    );

    // Overlapping rectangles never form a region.
    match RectilinearRegion::of([
        Rectangle::from_bounds(0, 0, 2, 2)?,
        Rectangle::from_bounds(1, 1, 3, 3)?,
    ]) {
        Err(err @ RegionError::Overlap { .. }) => println!("rejected: {err}"),
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
