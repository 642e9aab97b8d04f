use nox_grid::{AxisPair, Field};
use nox_render::{
    EXPORT_DPI, EXPORT_FILE_NAME, ExportArtifact, ExportFormat, HeatmapRenderer, RenderConfig,
    RenderError, Renderer, export,
};

fn rendered(dpi: u32) -> nox_render::RenderedImage {
    let field = Field::new(2, 3, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
    let axes = AxisPair::global(2, 3).unwrap();
    HeatmapRenderer::new(RenderConfig::new().with_dpi(dpi))
        .render(&field, &axes, "Downscaled NO₂ Data (4x)")
        .unwrap()
}

#[test]
fn png_export_artifact() {
    let artifact = export(&rendered(5), ExportFormat::Png).unwrap();
    assert_eq!(artifact.file_name(), EXPORT_FILE_NAME);
    assert_eq!(artifact.file_name(), "no2_data.png");
    assert_eq!(artifact.mime(), "image/png");
    assert_eq!(&artifact.bytes()[..4], b"\x89PNG");
}

#[test]
fn exported_png_decodes_to_same_raster() {
    let image = rendered(5);
    let artifact = export(&image, ExportFormat::Png).unwrap();
    let decoded = image::load_from_memory(artifact.bytes()).unwrap().to_rgb8();
    assert_eq!(&decoded, image.image());
}

#[test]
fn export_resolution_is_300_dpi() {
    assert_eq!(EXPORT_DPI, 300);
    let image = rendered(EXPORT_DPI);
    assert_eq!(image.dimensions(), (3600, 1800));
}

#[test]
fn pdf_and_csv_unsupported() {
    let image = rendered(5);
    for format in [ExportFormat::Pdf, ExportFormat::Csv] {
        let err = export(&image, format).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat { format: f } if f == format));
    }
}

#[test]
fn write_to_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let artifact = export(&rendered(5), ExportFormat::Png).unwrap();
    let path = artifact.write_to(&out).unwrap();
    assert_eq!(path, out.join("no2_data.png"));
    assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes());
}

#[test]
fn custom_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ExportArtifact::png("original.png", rendered(5).image()).unwrap();
    let path = artifact.write_to(dir.path()).unwrap();
    assert!(path.ends_with("original.png"));
    assert!(path.exists());
}
