mod common;
use common::{PNG_SIGNATURE, dark_pixels, hidden, item, png_size, temp_out_dir};

use rosterboard::core::catalog::CatalogProvider;
use rosterboard::errors::{AppError, AppResult};
use rosterboard::export::{GenerateLogic, GenerateOptions, PageExporter, page_file_name};
use rosterboard::models::Category::{KF, Media};
use rosterboard::core::matcher::match_roster;
use rosterboard::models::{Item, RosterEntry};
use rosterboard::render::canvas::{Anchor, Canvas, DrawOp};
use rosterboard::render::metrics::Font;
use rosterboard::render::raster::Rasterizer;
use rosterboard::render::report::{
    INNER_COLUMN_WIDTH, ReportLabels, ReportLayout, SLOT_A_X, Tier,
};
use std::fs;
use std::time::Duration;

struct FailingCatalog;

impl CatalogProvider for FailingCatalog {
    fn fetch_catalog(&self, _page: Option<u8>) -> AppResult<Vec<Item>> {
        Err(AppError::Export("backend unreachable".into()))
    }
}

fn catalog() -> Vec<Item> {
    vec![
        item("1-01", Some(KF), None),
        item("1-02", None, Some(Media)),
        hidden(item("1-03", Some(KF), None)),
        item("2-01", Some(Media), Some(KF)),
        item("3-01", None, None),
    ]
}

fn raster() -> Rasterizer {
    Rasterizer::new("Arial", None).expect("a font face is installed")
}

#[test]
fn rasterizer_scales_and_encodes_png() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="5"><rect width="10" height="5" fill="red"/></svg>"#;
    let bytes = raster().svg_to_png(svg, 2.0).expect("png");
    assert_eq!(bytes[..8], PNG_SIGNATURE);
    assert_eq!(png_size(&bytes), (20, 10));
}

#[test]
fn invalid_svg_is_a_render_error() {
    let err = raster().svg_to_png("not svg", 1.0).unwrap_err();
    assert!(matches!(err, AppError::Render(_)));
}

#[test]
fn export_page_writes_double_scale_png() {
    let out = temp_out_dir("export_page_one");
    let catalog = catalog();
    let raster = raster();
    let exporter = PageExporter::new(&catalog, &raster, &out, Duration::ZERO, true);

    let result = exporter.export_page(1).expect("export");
    assert_eq!(result.rows, 2);
    assert!(result.warnings.is_empty());

    let path = result.path.expect("file written");
    assert_eq!(path, out.join("page-1-export.png"));
    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
    // 1200 px frame at scale 2, header + 2 rows
    assert_eq!(png_size(&bytes), (2400, 308));
}

#[test]
fn export_all_writes_three_files() {
    let out = temp_out_dir("export_all_pages");
    let catalog = catalog();
    let raster = raster();
    let exporter = PageExporter::new(&catalog, &raster, &out, Duration::from_millis(1), true);

    let results = exporter.export_all().expect("export all");
    let pages: Vec<u8> = results.iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);

    for page in 1..=3u8 {
        assert!(out.join(page_file_name(page)).exists());
    }
}

#[test]
fn failed_fetch_exports_an_empty_page() {
    let out = temp_out_dir("export_failed_fetch");
    let raster = raster();
    let exporter = PageExporter::new(&FailingCatalog, &raster, &out, Duration::ZERO, true);

    let results = exporter.export_all().expect("export keeps going");
    assert_eq!(results.len(), 3);
    for r in &results {
        assert_eq!(r.rows, 0);
        assert_eq!(r.warnings.len(), 1);
        assert!(r.path.is_some());
    }
}

#[test]
fn generate_writes_report_and_json() {
    let out = temp_out_dir("generate_report");
    let catalog = catalog();
    let layout = ReportLayout::new(ReportLabels::default(), "19 octobre 2026");
    let opts = GenerateOptions {
        out_dir: out.clone(),
        json: Some(out.join("report.json")),
        force: true,
    };

    let outcome = GenerateLogic::generate(
        "noise 1-01 Ann, 2-01 Bob\n1-03 Hidden 9-99",
        &catalog,
        &layout,
        &raster(),
        &opts,
    )
    .expect("generate");

    assert_eq!(outcome.total_people, 4);
    assert_eq!(outcome.dropped, vec!["noise"]);
    // Ann in slot A, Bob in both slots, two unidentified
    assert_eq!(outcome.summary.total_entries, 5);
    assert_eq!(outcome.summary.tier, Tier::Normal);
    assert_eq!(outcome.report.unidentified.len(), 2);

    let png = fs::read(out.join("activity-lists.png")).unwrap();
    assert_eq!(png_size(&png), (800, 1131));
    // names and tokens below the header band
    assert!(dark_pixels(&png, 160, 1000) > 100);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("report.json")).unwrap()).unwrap();
    assert_eq!(json["total_people"], 4);
    assert_eq!(json["report"]["slot_a"]["KF"][0]["display_name"], "Ann");
    assert_eq!(json["report"]["unidentified"][1]["display_name"], "NO NAME");
}

#[test]
fn generate_with_failing_catalog_marks_everyone_unidentified() {
    let out = temp_out_dir("generate_failing_catalog");
    let layout = ReportLayout::new(ReportLabels::default(), "today");
    let opts = GenerateOptions {
        out_dir: out.clone(),
        force: true,
        ..Default::default()
    };

    let outcome =
        GenerateLogic::generate("1-01 Ann 1-02 Bob", &FailingCatalog, &layout, &raster(), &opts)
            .expect("generate");

    assert_eq!(outcome.report.unidentified.len(), 2);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(out.join("activity-lists.png").exists());
}

#[test]
fn missing_family_falls_back_to_an_installed_face() {
    let raster = Rasterizer::new("No Such Family 42", None).expect("fallback face");
    assert_ne!(raster.resolved_family(), "No Such Family 42");
    assert!(raster.font_stack().ends_with("sans-serif"));

    let mut canvas = Canvas::new(240, 40);
    canvas.text(
        10.0,
        28.0,
        " Maximilian Alexander",
        Font::regular(14.0),
        "#212529",
        Anchor::Start,
    );
    let bytes = raster
        .svg_to_png(&canvas.to_svg(&raster.font_stack()), 1.0)
        .expect("png");
    assert!(dark_pixels(&bytes, 0, 40) > 0);
}

#[test]
fn truncated_names_leave_room_for_the_token() {
    let raster = raster();
    let measure = raster.text_measure();
    let layout =
        ReportLayout::new(ReportLabels::default(), "today").with_measure(raster.text_measure());

    let catalog = vec![item("1-01", Some(KF), None)];
    let name = "Bartholomew-Maximilian Fitzgerald-Montgomery";
    let report = match_roster(&[RosterEntry::new("1-01", name)], &catalog);
    let rendered = layout.render(&report, 1);

    let find = |prefix: &str| {
        rendered
            .canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { x, text, font, .. } if text.starts_with(prefix) => {
                    Some((*x, text.clone(), *font))
                }
                _ => None,
            })
            .expect("text drawn")
    };
    let (name_x, drawn, name_font) = find(" Bart");
    let (token_x, token, token_font) = find("1-01");

    assert!(drawn.ends_with("..."));
    let name_end = name_x + measure.measure(&drawn, name_font);
    assert!((token_x - (name_end + 5.0)).abs() < 1e-9);
    assert!(token_x + measure.measure(&token, token_font) <= SLOT_A_X + INNER_COLUMN_WIDTH);
}

#[test]
fn write_failure_on_one_page_keeps_exporting_the_others() {
    let out = temp_out_dir("export_write_failure");
    // a directory where the first file should go
    fs::create_dir_all(out.join(page_file_name(1))).unwrap();

    let catalog = catalog();
    let raster = raster();
    let exporter = PageExporter::new(&catalog, &raster, &out, Duration::ZERO, true);

    let results = exporter.export_all().expect("export keeps going");
    assert_eq!(results.len(), 3);
    assert!(results[0].path.is_none());
    assert_eq!(results[0].warnings.len(), 1);
    assert!(results[0].warnings[0].contains("cannot write"));

    for page in 2..=3u8 {
        let path = out.join(page_file_name(page));
        assert!(path.exists());
        let bytes = fs::read(&path).unwrap();
        assert!(dark_pixels(&bytes, 0, png_size(&bytes).1) > 0);
    }
}
