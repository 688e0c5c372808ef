//! Tests for the SVG painter and its elements.

use super::*;
use crate::chart::data::DataPoint;
use crate::chart::metrics::EstimatedMetrics;
use crate::config::ChartConfig;

fn style() -> ChartStyle {
    ChartStyle::from_config(&ChartConfig::default()).unwrap()
}

fn layout(points: &[(&str, f64)]) -> ChartLayout {
    let data: Vec<DataPoint> = points
        .iter()
        .map(|(label, value)| DataPoint::new(*label, *value))
        .collect();
    ChartLayout::compute(&data, &ChartConfig::default(), &EstimatedMetrics)
}

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }
}

mod element_tests {
    use super::*;

    #[test]
    fn bar_renders_rect_with_fill() {
        let bar = Bar {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 30.0,
            color: Rgb::new(0x40, 0x82, 0x6D),
        };

        assert_eq!(
            bar.render(),
            r##"<rect x="10" y="20" width="100" height="30" fill="#40826D"/>"##
        );
    }

    #[test]
    fn label_is_right_aligned_and_escaped() {
        let label = Label {
            x: 50.0,
            y: 60.5,
            text: "Terms & Conditions".to_string(),
            color: Rgb::new(0, 0, 0),
            font_family: "sans-serif".to_string(),
            font_size: 14.0,
        };
        let svg = label.render();

        assert!(svg.contains(r#"x="50" y="60.5""#));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains(r#"dominant-baseline="middle""#));
        assert!(svg.contains(r#"font-size="14""#));
        assert!(svg.contains(">Terms &amp; Conditions</text>"));
    }

    #[test]
    fn builder_indents_elements() {
        let svg = SvgBuilder::new(200, 100)
            .push_raw("<g>\n<circle/>\n</g>")
            .build();

        assert!(svg.starts_with(r#"<svg width="200" height="100" viewBox="0 0 200 100""#));
        assert!(svg.contains("    <g>\n    <circle/>\n    </g>\n"));
        assert!(svg.ends_with("</svg>\n"));
    }
}

mod paint_tests {
    use super::*;

    #[test]
    fn draws_one_bar_and_label_per_row() {
        let svg = paint(&layout(&[("A", 3.0), ("B", 1.0)]), &style());

        // background plus two bars
        assert_eq!(svg.matches("<rect ").count(), 3);
        assert_eq!(svg.matches("<text ").count(), 2);
    }

    #[test]
    fn bars_appear_in_table_order() {
        let svg = paint(&layout(&[("First", 3.0), ("Second", 9.0)]), &style());

        let first = svg.find(">First</text>").unwrap();
        let second = svg.find(">Second</text>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn every_bar_uses_the_configured_color() {
        let svg = paint(&layout(&[("A", 3.0), ("B", 1.0), ("C", 2.0)]), &style());

        assert_eq!(svg.matches(r##"fill="#40826D""##).count(), 3);
    }

    #[test]
    fn no_axes_or_title() {
        let svg = paint(&layout(&[("A", 3.0)]), &style());

        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn empty_labels_emit_no_text() {
        let svg = paint(&layout(&[("", 3.0), ("", 1.0)]), &style());

        assert_eq!(svg.matches("<text ").count(), 0);
        assert_eq!(svg.matches("<rect ").count(), 3);
    }

    #[test]
    fn zero_value_bars_are_skipped_but_labelled() {
        let svg = paint(&layout(&[("Full", 5.0), ("Empty", 0.0)]), &style());

        assert_eq!(svg.matches("<rect ").count(), 2);
        assert!(svg.contains(">Empty</text>"));
    }

    #[test]
    fn shrunk_labels_use_layout_font_size() {
        let long = "Agreement Concerning the Transfer of Intellectual Property Rights";
        let chart = layout(&[(long, 3.0)]);
        let svg = paint(&chart, &style());

        assert!(chart.font_size < 14.0);
        assert!(svg.contains(&format!(r#"font-size="{}""#, chart.font_size)));
    }

    #[test]
    fn output_is_deterministic() {
        let chart = layout(&[("A", 3.0), ("B", 1.0)]);
        assert_eq!(paint(&chart, &style()), paint(&chart, &style()));
    }
}
