use blueprint::path::parse_outline;
use blueprint::Vertex;

#[test]
fn rectangle_outline_parses_to_four_vertices() {
    let markup = r#"<svg><path d="M 0 0 L 100 0 L 100 50 L 0 50 Z"/></svg>"#;
    let g = parse_outline(markup).expect("rectangle parses");
    assert_eq!(
        g.vertices,
        vec![
            Vertex { x: 0.0, y: 0.0 },
            Vertex { x: 100.0, y: 0.0 },
            Vertex { x: 100.0, y: 50.0 },
            Vertex { x: 0.0, y: 50.0 },
        ]
    );
    assert_eq!(g.dimensions.width, 100.0);
    assert_eq!(g.dimensions.height, 50.0);
    assert_eq!(g.scale, 1.0);
}

#[test]
fn single_point_yields_none() {
    let markup = r#"<svg><path d="M 50 50"/></svg>"#;
    assert!(parse_outline(markup).is_none());
}

#[test]
fn horizontal_and_vertical_commands_move_one_axis() {
    let markup = r#"<svg><path d="M 0 0 H 100 V 50 H 0 Z"/></svg>"#;
    let g = parse_outline(markup).expect("H/V parse");
    assert_eq!(
        g.vertices,
        vec![
            Vertex { x: 0.0, y: 0.0 },
            Vertex { x: 100.0, y: 0.0 },
            Vertex { x: 100.0, y: 50.0 },
            Vertex { x: 0.0, y: 50.0 },
        ]
    );
}

#[test]
fn lowercase_commands_fold_to_absolute() {
    // Relative forms are deliberately interpreted as absolute coordinates.
    let markup = r#"<svg><path d="m 10 10 l 20 10"/></svg>"#;
    let g = parse_outline(markup).expect("folded commands parse");
    assert_eq!(
        g.vertices,
        vec![Vertex { x: 10.0, y: 10.0 }, Vertex { x: 20.0, y: 10.0 }]
    );
}

#[test]
fn curve_commands_are_silently_dropped() {
    let markup = r#"<svg><path d="M 0 0 C 10 20 30 40 50 60 L 10 0"/></svg>"#;
    let g = parse_outline(markup).expect("line endpoints remain");
    assert_eq!(
        g.vertices,
        vec![Vertex { x: 0.0, y: 0.0 }, Vertex { x: 10.0, y: 0.0 }]
    );
    assert_eq!(g.dimensions.width, 10.0);
    assert_eq!(g.dimensions.height, 0.0);
}

#[test]
fn implicit_coordinate_runs_extend_the_polyline() {
    let markup = r#"<svg><path d="M 0 0 L 10 0 20 0 30 5"/></svg>"#;
    let g = parse_outline(markup).expect("implicit run parses");
    assert_eq!(g.vertices.len(), 4);
    assert_eq!(g.vertices[3], Vertex { x: 30.0, y: 5.0 });
}

#[test]
fn comma_separated_operands_parse() {
    let markup = r#"<svg><path d="M0,0 L100,0 L100,50"/></svg>"#;
    let g = parse_outline(markup).expect("comma operands parse");
    assert_eq!(g.vertices.len(), 3);
}

#[test]
fn single_quoted_attribute_is_found() {
    let markup = "<svg><path d='M 0 0 L 4 4'/></svg>";
    assert!(parse_outline(markup).is_some());
}

#[test]
fn markup_without_path_data_yields_none() {
    assert!(parse_outline("<svg><rect width=\"10\" height=\"10\"/></svg>").is_none());
}

#[test]
fn first_path_wins_when_several_exist() {
    let markup = r#"<svg><path d="M 0 0 L 1 1"/><path d="M 5 5 L 9 9"/></svg>"#;
    let g = parse_outline(markup).expect("first path parses");
    assert_eq!(g.vertices[0], Vertex { x: 0.0, y: 0.0 });
    assert_eq!(g.vertices[1], Vertex { x: 1.0, y: 1.0 });
}

#[test]
fn overlong_markup_is_rejected() {
    let long = format!(
        "<svg><path d=\"{}\"/></svg>",
        "M 0 0 L 1 1 ".repeat(200_000)
    );
    assert!(parse_outline(&long).is_none());
}

#[test]
fn out_of_bounds_operand_stops_the_scan() {
    let markup = r#"<svg><path d="M 0 0 L 1e38 0 L 5 5"/></svg>"#;
    assert!(parse_outline(markup).is_none());
}
