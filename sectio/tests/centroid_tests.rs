#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use test_case::test_case;

    use sectio::centroid::{Centroid, CentroidEngine};
    use sectio::geometry::primitives::{Circle, Point, Polygon, Rect, SemiCircle, Triangle};
    use sectio::util::FPA;

    /// A small mixed figure used by the invariance and idempotence tests.
    fn populate(engine: &mut CentroidEngine) {
        engine.add_rect(Rect::new(2.0, 3.0, 4.0, 6.0), false);
        engine.add_circle(Circle::new(-3.0, 1.0, 2.0), false);
        engine.add_triangle(
            Triangle::new(Point(0.0, 0.0), Point(4.0, 0.0), Point(0.0, 3.0)),
            true,
        );
    }

    fn build(origin: (f64, f64)) -> CentroidEngine {
        let mut engine = CentroidEngine::new();
        engine.set_origin(origin.0, origin.1);
        populate(&mut engine);
        engine
    }

    #[test_case(4.0, 5.0, 20.0 ; "positive dims")]
    #[test_case(-4.0, 5.0, 20.0 ; "negative length")]
    #[test_case(4.0, -5.0, 20.0 ; "negative width")]
    #[test_case(-4.0, -5.0, 20.0 ; "both negative")]
    #[test_case(0.0, 5.0, 0.0 ; "zero length")]
    fn rect_area_is_unsigned(length: f64, width: f64, expected: f64) {
        let mut engine = CentroidEngine::new();
        engine.add_rect(Rect::new(0.0, 0.0, length, width), false);
        assert_eq!(engine.registry.rects[0].area, expected);
    }

    #[test]
    fn empty_registry_is_degenerate() {
        let engine = CentroidEngine::new();
        let result = engine.calculate_centroid();
        assert_eq!(
            result,
            Centroid {
                x: 0.0,
                y: 0.0,
                area: 0.0,
                valid: false
            }
        );
    }

    #[test]
    fn square_centered_on_origin() {
        let mut engine = CentroidEngine::new();
        engine.set_origin(0.0, 0.0);
        engine.add_rect(Rect::new(-5.0, -5.0, 10.0, 10.0), false);

        let result = engine.calculate_centroid();
        assert!(result.valid);
        assert_eq!(FPA(result.x), FPA(0.0));
        assert_eq!(FPA(result.y), FPA(0.0));
        assert_eq!(FPA(result.area), FPA(100.0));
    }

    #[test]
    fn congruent_cutout_cancels_to_degenerate() {
        let mut engine = CentroidEngine::new();
        engine.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0), false);
        engine.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0), true);

        let result = engine.calculate_centroid();
        assert!(!result.valid);
        assert_eq!(result.area, 0.0);
    }

    #[test_case((500.0, 500.0) ; "shifted origin")]
    #[test_case((300.0, 200.0) ; "canvas origin")]
    #[test_case((-40.0, 25.0) ; "negative origin")]
    fn reported_centroid_is_origin_invariant(origin: (f64, f64)) {
        let reference = build((0.0, 0.0)).calculate_centroid();
        let shifted = build(origin).calculate_centroid();

        assert_eq!(FPA(shifted.x), FPA(reference.x));
        assert_eq!(FPA(shifted.y), FPA(reference.y));
        assert_eq!(FPA(shifted.area), FPA(reference.area));
    }

    #[test]
    fn cutouts_exceeding_additive_area_still_yield_a_centroid() {
        let mut engine = CentroidEngine::new();
        engine.add_rect(Rect::new(0.0, 0.0, 2.0, 2.0), false);
        engine.add_rect(Rect::new(0.0, 0.0, 4.0, 4.0), true);

        let result = engine.calculate_centroid();
        assert!(result.valid);
        assert_eq!(FPA(result.area), FPA(-12.0));
        assert_eq!(FPA(result.x), FPA(7.0 / 3.0));
        assert_eq!(FPA(result.y), FPA(7.0 / 3.0));
    }

    #[test]
    fn triangle_centroid_matches_vertex_mean() {
        let mut engine = CentroidEngine::new();
        engine.add_triangle(
            Triangle::new(Point(0.0, 0.0), Point(6.0, 0.0), Point(0.0, 6.0)),
            false,
        );

        let result = engine.calculate_centroid();
        assert_eq!(FPA(result.x), FPA(2.0));
        assert_eq!(FPA(result.y), FPA(2.0));
        assert_eq!(FPA(result.area), FPA(18.0));
    }

    #[test]
    fn semi_circle_center_pins_the_halved_coordinates() {
        let mut engine = CentroidEngine::new();
        engine.add_semi_circle(SemiCircle::new(4.0, 2.0, 3.0), false);

        let result = engine.calculate_centroid();
        assert_eq!(FPA(result.x), FPA(2.0));
        assert_eq!(FPA(result.y), FPA(1.0 + 2.0 / PI));
        assert_eq!(FPA(result.area), FPA(9.0 * PI / 2.0));
    }

    #[test]
    fn polygons_never_affect_the_reduction() {
        let mut engine = CentroidEngine::new();
        engine.add_rect(Rect::new(1.0, 1.0, 2.0, 2.0), false);
        let before = engine.calculate_centroid();

        engine.add_polygon(
            Polygon::new(vec![
                Point(0.0, 0.0),
                Point(10.0, 0.0),
                Point(10.0, 10.0),
                Point(0.0, 10.0),
            ]),
            false,
        );
        engine.add_polygon(
            Polygon::new(vec![Point(0.0, 0.0), Point(5.0, 0.0), Point(0.0, 5.0)]),
            true,
        );

        assert_eq!(engine.calculate_centroid(), before);
        assert_eq!(engine.registry.polygons.len(), 2);
        assert_eq!(engine.registry.polygons[0].area, 100.0);
        assert_eq!(engine.registry.polygons[1].area, 12.5);
    }

    #[test]
    fn degenerate_polygons_are_accepted_with_zero_area() {
        let mut engine = CentroidEngine::new();
        engine.add_polygon(Polygon::new(vec![]), false);
        engine.add_polygon(Polygon::new(vec![Point(1.0, 1.0), Point(2.0, 2.0)]), false);

        assert_eq!(engine.registry.polygons[0].area, 0.0);
        assert_eq!(engine.registry.polygons[1].area, 0.0);
        assert_eq!(engine.registry.polygons[1].shape.n_vertices(), 2);
    }

    #[test]
    fn clear_then_rebuild_reproduces_results_exactly() {
        let mut engine = build((300.0, 200.0));
        let first = engine.calculate_centroid();

        engine.clear();
        assert!(engine.registry.is_empty());
        assert_eq!(engine.calculate_centroid(), Centroid::degenerate());

        populate(&mut engine);
        let second = engine.calculate_centroid();

        //pure function of its inputs, so the reduction is reproduced bit for bit
        assert_eq!(second, first);
    }

    #[test]
    fn moving_the_origin_leaves_existing_records_in_place() {
        let mut engine = CentroidEngine::new();
        engine.set_origin(100.0, 100.0);
        engine.add_circle(Circle::new(0.0, 0.0, 1.0), false);
        let baked = engine.registry.circles[0].center;

        engine.set_origin(0.0, 0.0);
        assert_eq!(engine.registry.circles[0].center, baked);

        //the reported value is relative to the origin as it is at reduction time
        let result = engine.calculate_centroid();
        assert_eq!(FPA(result.x), FPA(100.0));
        assert_eq!(FPA(result.y), FPA(-100.0));
    }
}
