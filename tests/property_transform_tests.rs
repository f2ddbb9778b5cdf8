use chart_fit::core::Transform;
use proptest::prelude::*;

fn well_conditioned() -> impl Strategy<Value = Transform> {
    (
        -3.0f64..3.0,
        prop_oneof![0.25f64..4.0, -4.0f64..-0.25],
        prop_oneof![0.25f64..4.0, -4.0f64..-0.25],
        -1_000.0f64..1_000.0,
        -1_000.0f64..1_000.0,
    )
        .prop_map(|(angle, sx, sy, px, py)| Transform::rotate_and_scale_around(angle, [sx, sy], [px, py]))
}

fn any_affine() -> impl Strategy<Value = Transform> {
    prop::array::uniform6(-10.0f64..10.0).prop_map(Transform::from_array)
}

proptest! {
    #[test]
    fn inverse_round_trip_property(
        transform in well_conditioned(),
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0
    ) {
        let inverse = transform.inverse().expect("well-conditioned transform is invertible");
        let [rx, ry] = inverse.transform_point(transform.transform_point([x, y]));
        prop_assert!((rx - x).abs() <= 1e-6);
        prop_assert!((ry - y).abs() <= 1e-6);
    }

    #[test]
    fn then_composes_in_application_order(
        first in any_affine(),
        second in any_affine(),
        x in -100.0f64..100.0,
        y in -100.0f64..100.0
    ) {
        let composed = first.then(&second).transform_point([x, y]);
        let sequential = second.transform_point(first.transform_point([x, y]));
        prop_assert!((composed[0] - sequential[0]).abs() <= 1e-7);
        prop_assert!((composed[1] - sequential[1]).abs() <= 1e-7);
    }

    #[test]
    fn mul_matches_nested_application(
        outer in any_affine(),
        inner in any_affine(),
        x in -100.0f64..100.0,
        y in -100.0f64..100.0
    ) {
        let product = outer.mul(&inner).transform_point([x, y]);
        let nested = outer.transform_point(inner.transform_point([x, y]));
        prop_assert!((product[0] - nested[0]).abs() <= 1e-7);
        prop_assert!((product[1] - nested[1]).abs() <= 1e-7);
    }

    #[test]
    fn identity_maps_points_to_themselves(
        x in -1.0e12f64..1.0e12,
        y in -1.0e12f64..1.0e12
    ) {
        prop_assert_eq!(Transform::identity().transform_point([x, y]), [x, y]);
    }

    #[test]
    fn scale_and_translation_setters_commute(
        sx in -100.0f64..100.0,
        sy in -100.0f64..100.0,
        tx in -1_000.0f64..1_000.0,
        ty in -1_000.0f64..1_000.0
    ) {
        let mut scale_first = Transform::new();
        scale_first.set_scale(sx, sy).set_translation(tx, ty);
        let mut translate_first = Transform::new();
        translate_first.set_translation(tx, ty).set_scale(sx, sy);
        prop_assert_eq!(scale_first.to_array(), translate_first.to_array());
    }
}
