//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct MyTypes {
        gid: GlyphId,
        point: Point<i32>,
        bounds: BoundingBox<i32>,
    }

    let my_instance = MyTypes {
        gid: GlyphId::new(69),
        point: Point::new(-12, 700),
        bounds: BoundingBox {
            x_min: -12,
            y_min: -200,
            x_max: 640,
            y_max: 700,
        },
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
