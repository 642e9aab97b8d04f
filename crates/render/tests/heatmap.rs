use image::Rgb;
use nox_grid::{AxisPair, Field};
use nox_render::{
    Colormap, HeatmapRenderer, MISSING_COLOUR, RenderConfig, RenderError, Renderer,
};

fn small_config() -> RenderConfig {
    // 12 x 6 inches at 10 dpi -> 120 x 60 pixels.
    RenderConfig::new().with_dpi(10)
}

#[test]
fn raster_size_follows_figure_and_dpi() {
    let field = Field::filled(18, 36, 0.1).unwrap();
    let axes = AxisPair::global(18, 36).unwrap();
    let image = HeatmapRenderer::new(small_config())
        .render(&field, &axes, "Original NO₂ Data")
        .unwrap();
    assert_eq!(image.dimensions(), (120, 60));
    assert_eq!(image.title(), "Original NO₂ Data");
}

#[test]
fn constant_field_is_uniform() {
    let field = Field::filled(4, 8, 0.25).unwrap();
    let axes = AxisPair::global(4, 8).unwrap();
    let image = HeatmapRenderer::new(small_config())
        .render(&field, &axes, "flat")
        .unwrap();
    let expected = Colormap::Viridis.sample(0.5);
    assert!(image.image().pixels().all(|p| *p == expected));
}

#[test]
fn values_clamp_to_colour_range() {
    let field = Field::new(1, 2, vec![-5.0, 5.0]).unwrap();
    let axes = AxisPair::new(vec![0.0], vec![-90.0, 90.0]).unwrap();
    let image = HeatmapRenderer::new(small_config())
        .render(&field, &axes, "clamped")
        .unwrap();
    let (w, _) = image.dimensions();
    assert_eq!(*image.image().get_pixel(0, 0), Colormap::Viridis.sample(0.0));
    assert_eq!(
        *image.image().get_pixel(w - 1, 0),
        Colormap::Viridis.sample(1.0)
    );
}

#[test]
fn north_is_up() {
    // Row 0 is the southernmost latitude; it must land at the bottom.
    let field = Field::new(2, 1, vec![0.0, 0.5]).unwrap();
    let axes = AxisPair::new(vec![-45.0, 45.0], vec![0.0]).unwrap();
    let image = HeatmapRenderer::new(small_config())
        .render(&field, &axes, "north up")
        .unwrap();
    let (_, h) = image.dimensions();
    assert_eq!(*image.image().get_pixel(0, 0), Colormap::Viridis.sample(1.0));
    assert_eq!(
        *image.image().get_pixel(0, h - 1),
        Colormap::Viridis.sample(0.0)
    );
}

#[test]
fn missing_cells_are_grey() {
    let field = Field::new(1, 2, vec![f64::NAN, 0.5]).unwrap();
    let axes = AxisPair::new(vec![0.0], vec![-90.0, 90.0]).unwrap();
    let image = HeatmapRenderer::new(small_config())
        .render(&field, &axes, "gaps")
        .unwrap();
    assert_eq!(*image.image().get_pixel(0, 0), MISSING_COLOUR);
    assert_ne!(MISSING_COLOUR, Rgb([0, 0, 0]));
}

#[test]
fn difference_config_centres_on_zero() {
    let field = Field::filled(2, 2, 0.0).unwrap();
    let axes = AxisPair::global(2, 2).unwrap();
    let image = HeatmapRenderer::new(small_config().for_difference())
        .render(&field, &axes, "Difference: Downscaled - Original")
        .unwrap();
    assert_eq!(
        *image.image().get_pixel(0, 0),
        Colormap::Coolwarm.sample(0.5)
    );
}

#[test]
fn mismatched_axes_rejected() {
    let field = Field::filled(4, 8, 0.0).unwrap();
    let axes = AxisPair::global(8, 4).unwrap();
    let err = HeatmapRenderer::new(small_config())
        .render(&field, &axes, "bad")
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::ShapeMismatch {
            field: (4, 8),
            axes: (8, 4)
        }
    ));
}

#[test]
fn invalid_range_rejected_before_drawing() {
    let field = Field::filled(2, 2, 0.0).unwrap();
    let axes = AxisPair::global(2, 2).unwrap();
    let renderer = HeatmapRenderer::new(small_config().with_range(0.5, 0.0));
    assert!(matches!(
        renderer.render(&field, &axes, "bad"),
        Err(RenderError::InvalidConfig { .. })
    ));
}
