//! # Pipeline Integration Tests
//!
//! Drives the whole stack, solve -> build -> plan -> render -> export,
//! the way the preview and the export buttons do.

use std::collections::HashSet;

use blockcircle::core::{build, solve, CircleConfig, CircleMode, RADIUS_MAX};
use blockcircle::export::{CircleDocument, ExportError, ExportKind};
use blockcircle::rendering::{plan, Color};
use blockcircle::{CirclePipeline, EngineSettings};

fn config(radius: i64, mode: CircleMode) -> CircleConfig {
    CircleConfig::new(radius, mode).expect("radius in range")
}

/// Radius 1 outline is exactly the four direct neighbours of the center.
#[test]
fn test_radius_one_outline() {
    let blocks = build(config(1, CircleMode::Outline));
    let got: Vec<(i32, i32)> = blocks.iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(got, vec![(0, 1), (0, -1), (1, 0), (-1, 0)]);
}

/// Filling adds blocks, and the center is one of them.
#[test]
fn test_radius_five_outline_vs_filled() {
    let outline = build(config(5, CircleMode::Outline));
    let filled = build(config(5, CircleMode::Filled));

    assert!(filled.len() > outline.len());
    assert!(filled.contains(0, 0));
    assert!(filled.is_superset(&outline));
}

/// The largest radius runs the full pipeline with no duplicate blocks.
#[test]
fn test_radius_fifty_full_pipeline() {
    assert!((2..=50).contains(&solve(50).len()));

    let mut pipeline = CirclePipeline::default();
    pipeline.attach_surface();

    for mode in CircleMode::ALL {
        let c = config(i64::from(RADIUS_MAX), mode);
        pipeline.apply(c);

        let unique: HashSet<(i32, i32)> = pipeline.blocks().iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(unique.len(), pipeline.blocks().len(), "{mode}: duplicate block");

        let png = pipeline.export_raster().expect("surface attached");
        let decoded = image::load_from_memory(&png).expect("valid png").to_rgba8();
        assert_eq!((decoded.width(), decoded.height()), (600, 600));
        assert_eq!(decoded.get_pixel(300, 300).0, [0xef, 0x44, 0x44, 0xff]);

        let json = pipeline.export_document().expect("serializable");
        assert!(!json.is_empty());
    }
}

/// floor(600 / 105) = 5 pixels per block.
#[test]
fn test_radius_fifty_block_size() {
    assert_eq!(plan(50, 600).block_size_px, 5);
}

/// The exported document re-derives the same block count.
#[test]
fn test_document_round_trip_radius_three() {
    let c = config(3, CircleMode::Outline);
    let mut pipeline = CirclePipeline::default();
    pipeline.apply(c);

    let bytes = pipeline.export_document().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let blocks = value["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), build(c).len());
    assert_eq!(value["radius"], 3);
    assert_eq!(value["mode"], "outline");
    assert!(blocks.iter().all(|b| b["z"] == 0));

    let doc = CircleDocument::from_json(std::str::from_utf8(&bytes).unwrap()).unwrap();
    assert_eq!(doc.config().unwrap(), c);
}

/// Document keys appear in the order other tools expect.
#[test]
fn test_document_key_order() {
    let mut pipeline = CirclePipeline::default();
    pipeline.apply(config(2, CircleMode::Filled));
    let json = String::from_utf8(pipeline.export_document().unwrap()).unwrap();

    let radius = json.find("\"radius\"").unwrap();
    let mode = json.find("\"mode\"").unwrap();
    let blocks = json.find("\"blocks\"").unwrap();
    assert!(radius < mode && mode < blocks, "{json}");

    let x = json.find("\"x\"").unwrap();
    let y = json.find("\"y\"").unwrap();
    let z = json.find("\"z\"").unwrap();
    assert!(x < y && y < z);
}

/// Preview and export must agree block for block.
#[test]
fn test_preview_matches_export() {
    let mut pipeline = CirclePipeline::default();
    for radius in 1..=i64::from(RADIUS_MAX) {
        for mode in CircleMode::ALL {
            pipeline.apply(config(radius, mode));
            let doc = CircleDocument::from_json(
                std::str::from_utf8(&pipeline.export_document().unwrap()).unwrap(),
            )
            .unwrap();
            assert_eq!(doc.blocks.as_slice(), pipeline.blocks().as_slice(), "r={radius} {mode}");
        }
    }
}

/// Exporting a raster before a surface exists is an error, not an empty image.
#[test]
fn test_raster_export_before_attach() {
    let pipeline = CirclePipeline::default();
    assert!(matches!(
        pipeline.export_raster(),
        Err(ExportError::Precondition(_))
    ));
}

/// Custom canvas size and palette flow from settings through to pixels.
#[test]
fn test_settings_drive_rendering() {
    let settings = EngineSettings::from_toml_str(
        r##"
        canvas_extent_px = 300

        [palette]
        center = { fill = "#0000ff", stroke = "#0000ff" }
        "##,
    )
    .unwrap();

    let mut pipeline = CirclePipeline::new(settings).unwrap();
    pipeline.attach_surface();
    pipeline.apply(config(10, CircleMode::Outline));

    // floor(300 / 25) = 12
    assert_eq!(pipeline.plan().block_size_px, 12);
    let surface = pipeline.surface().unwrap();
    assert_eq!(surface.width(), 300);
    assert_eq!(surface.pixel(150, 150), Some(Color::rgb(0, 0, 255)));
    assert_eq!(
        pipeline.export_file_name(ExportKind::Png),
        "minecraft-circle-r10-outline.png"
    );
}
