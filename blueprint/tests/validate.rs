use blueprint::{
    drawable_vertices, validate, Dimensions, InvalidReason, OutlineGeometry, ValidationOutcome,
    Vertex,
};
use proptest::prelude::*;

fn geometry(vertices: Vec<Vertex>, width: f32, height: f32, scale: f32) -> OutlineGeometry {
    OutlineGeometry {
        vertices,
        dimensions: Dimensions { width, height },
        scale,
    }
}

fn two_points() -> Vec<Vertex> {
    vec![Vertex { x: 0.0, y: 0.0 }, Vertex { x: 10.0, y: 5.0 }]
}

fn reason(outcome: ValidationOutcome) -> Option<InvalidReason> {
    match outcome {
        ValidationOutcome::Valid(_) => None,
        ValidationOutcome::Invalid(r) => Some(r),
    }
}

#[test]
fn missing_geometry_is_no_data() {
    assert_eq!(reason(validate(None)), Some(InvalidReason::NoData));
}

#[test]
fn fewer_than_two_vertices_is_insufficient_edges() {
    let g = geometry(vec![Vertex { x: 1.0, y: 1.0 }], 10.0, 10.0, 1.0);
    assert_eq!(
        reason(validate(Some(&g))),
        Some(InvalidReason::InsufficientEdges)
    );
}

#[test]
fn nan_dimensions_and_zero_dimensions_are_distinct_reasons() {
    let nan_width = geometry(two_points(), f32::NAN, 50.0, 1.0);
    assert_eq!(
        reason(validate(Some(&nan_width))),
        Some(InvalidReason::InvalidDimensions)
    );

    let zero = geometry(two_points(), 0.0, 0.0, 1.0);
    assert_eq!(
        reason(validate(Some(&zero))),
        Some(InvalidReason::ZeroDimensions)
    );
}

#[test]
fn non_positive_or_nan_scale_is_invalid_scale() {
    for scale in [0.0, -1.0, f32::NAN] {
        let g = geometry(two_points(), 10.0, 10.0, scale);
        assert_eq!(
            reason(validate(Some(&g))),
            Some(InvalidReason::InvalidScale)
        );
    }
}

#[test]
fn stage_order_short_circuits() {
    // Vertex count fails before the NaN dimensions are ever inspected.
    let g = geometry(vec![Vertex { x: 0.0, y: 0.0 }], f32::NAN, f32::NAN, 0.0);
    assert_eq!(
        reason(validate(Some(&g))),
        Some(InvalidReason::InsufficientEdges)
    );
}

#[test]
fn well_formed_geometry_is_valid() {
    let g = geometry(two_points(), 100.0, 50.0, 2.0);
    assert!(validate(Some(&g)).is_valid());
}

#[test]
fn reason_codes_titles_and_messages_are_fixed() {
    let all = [
        InvalidReason::NoData,
        InvalidReason::InsufficientEdges,
        InvalidReason::InvalidDimensions,
        InvalidReason::InvalidScale,
        InvalidReason::ZeroDimensions,
        InvalidReason::InvalidEdgeData,
    ];
    let codes: Vec<&str> = all.iter().map(|r| r.code()).collect();
    assert_eq!(
        codes,
        vec![
            "no-data",
            "insufficient-edges",
            "invalid-dimensions",
            "invalid-scale",
            "zero-dimensions",
            "invalid-edge-data",
        ]
    );
    for r in all {
        assert!(!r.title().is_empty());
        assert!(!r.message().is_empty());
    }
}

#[test]
fn drawable_filter_rejects_nan_but_keeps_infinity() {
    let vertices = vec![
        Vertex { x: 0.0, y: 0.0 },
        Vertex {
            x: f32::NAN,
            y: 1.0,
        },
        Vertex {
            x: f32::INFINITY,
            y: 2.0,
        },
    ];
    let kept = drawable_vertices(&vertices);
    assert_eq!(kept.len(), 2);
    assert!(kept[1].x.is_infinite());
}

proptest! {
    #[test]
    fn finite_positive_geometry_always_validates(
        points in proptest::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 2..32),
        width in 0.001f32..10_000.0,
        height in 0.001f32..10_000.0,
        scale in 0.001f32..100.0,
    ) {
        let vertices: Vec<Vertex> = points
            .into_iter()
            .map(|(x, y)| Vertex { x, y })
            .collect();
        let g = geometry(vertices, width, height, scale);
        prop_assert!(validate(Some(&g)).is_valid());
    }
}
