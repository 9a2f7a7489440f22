//! Human-readable output.

use std::path::Path;

use mesh_types::{MeshBounds, MeshTopology};
use mesh_vs3d::{Decoded, Ffp, IndexOutOfRange};
use owo_colors::OwoColorize;

/// Print counts, bounds and detail markers for a decoded object.
pub fn print_summary(path: &Path, decoded: &Decoded) {
    let mesh = &decoded.mesh;
    println!("{}", path.display().bold());
    println!("  encoding:  {}", decoded.encoding);
    println!("  vertices:  {}", mesh.vertex_count());
    println!(
        "  polygons:  {} ({} corners, {} triangles when fanned)",
        mesh.face_count(),
        mesh.corner_count(),
        mesh.triangulate().len()
    );

    let degenerate = mesh.faces.iter().filter(|f| f.is_degenerate()).count();
    if degenerate > 0 {
        println!("  degenerate polygons: {degenerate}");
    }

    let details = mesh.detail_marker_count();
    if details > 0 {
        println!(
            "  {} {details} polygon(s) announce detail polygons; those were read as ordinary polygons",
            "!".yellow()
        );
    }

    match mesh.bounds_opt() {
        Some(bounds) => {
            let (min, max) = (bounds.min, bounds.max);
            println!(
                "  bounds:    ({}, {}, {}) .. ({}, {}, {})",
                min.x, min.y, min.z, max.x, max.y, max.z
            );
            println!("  extent:    {}", bounds.max_extent());
        }
        None => println!("  bounds:    (empty)"),
    }

    println!("{}", "✓ object loaded".green());
}

/// Print the soft-abort diagnostic.
pub fn print_soft_abort(path: &Path, diagnostic: &IndexOutOfRange) {
    println!("{}", path.display().bold());
    println!("  {} {diagnostic}", "✗".red());
}

/// Print the fields and value of an FFP word.
pub fn print_ffp(word: u32) {
    let ffp = Ffp(word);
    println!("word:      0x{word:08X}");
    println!("mantissa:  0x{:06X}", ffp.mantissa());
    println!("exponent:  {}", ffp.exponent());
    println!("negative:  {}", ffp.is_negative());
    println!("value:     {}", f64::from(ffp).bold());
}
