#[cfg(test)]
mod tests {
    use crate::capture::{crop_region, CaptureRegion, CropError, DragState};
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_tiny_gesture_yields_no_region() {
        let mut drag = DragState::default();
        drag.begin(100.0, 100.0);
        assert!(drag.finish(104.0, 160.0, 1.0).is_none());

        drag.begin(100.0, 100.0);
        assert!(drag.finish(160.0, 103.0, 1.0).is_none());

        // Exactly at the threshold still counts as accidental.
        drag.begin(0.0, 0.0);
        assert!(drag.finish(5.0, 50.0, 1.0).is_none());
    }

    #[test]
    fn test_plain_click_yields_no_region() {
        let mut drag = DragState::default();
        drag.begin(42.0, 42.0);
        assert!(drag.finish(42.0, 42.0, 2.0).is_none());
    }

    #[test]
    fn test_scale_maps_logical_to_physical() {
        let mut drag = DragState::default();
        drag.begin(10.0, 10.0);
        drag.update(50.0, 30.0);
        let region = drag.finish(110.0, 60.0, 2.0).unwrap();
        assert_eq!(
            region,
            CaptureRegion {
                x: 20,
                y: 20,
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn test_fractional_scale_floors_each_component() {
        let mut drag = DragState::default();
        drag.begin(10.0, 10.0);
        let region = drag.finish(110.0, 60.0, 1.5).unwrap();
        assert_eq!(
            region,
            CaptureRegion {
                x: 15,
                y: 15,
                width: 150,
                height: 75
            }
        );
    }

    #[test]
    fn test_drag_direction_does_not_matter() {
        let mut drag = DragState::default();
        drag.begin(110.0, 60.0);
        let backwards = drag.finish(10.0, 10.0, 2.0).unwrap();

        drag.begin(10.0, 60.0);
        let mixed = drag.finish(110.0, 10.0, 2.0).unwrap();

        let expected = CaptureRegion {
            x: 20,
            y: 20,
            width: 200,
            height: 100,
        };
        assert_eq!(backwards, expected);
        assert_eq!(mixed, expected);
    }

    #[test]
    fn test_finish_without_begin_is_none() {
        let mut drag = DragState::default();
        assert!(drag.finish(500.0, 500.0, 1.0).is_none());
    }

    #[test]
    fn test_update_without_begin_stays_idle() {
        let mut drag = DragState::default();
        drag.update(50.0, 50.0);
        assert!(!drag.is_dragging());
        assert!(drag.selection().is_none());
    }

    #[test]
    fn test_cancel_discards_the_gesture() {
        let mut drag = DragState::default();
        drag.begin(0.0, 0.0);
        drag.update(300.0, 300.0);
        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(drag.finish(600.0, 600.0, 1.0).is_none());
    }

    #[test]
    fn test_selection_is_normalized_while_dragging() {
        let mut drag = DragState::default();
        drag.begin(80.0, 20.0);
        drag.update(20.0, 90.0);
        let rect = drag.selection().unwrap();
        assert_eq!(rect.min_x, 20.0);
        assert_eq!(rect.min_y, 20.0);
        assert_eq!(rect.width(), 60.0);
        assert_eq!(rect.height(), 70.0);
    }

    fn checker_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn test_crop_within_bounds() {
        let image = checker_image(100, 100);
        let cropped = crop_region(
            &image,
            CaptureRegion {
                x: 10,
                y: 20,
                width: 30,
                height: 40,
            },
        )
        .unwrap();
        assert_eq!(cropped.dimensions(), (30, 40));
        assert_eq!(cropped.get_pixel(0, 0), image.get_pixel(10, 20));
    }

    #[test]
    fn test_crop_clamps_to_image_edge() {
        let image = checker_image(100, 100);
        let cropped = crop_region(
            &image,
            CaptureRegion {
                x: 90,
                y: 95,
                width: 50,
                height: 50,
            },
        )
        .unwrap();
        assert_eq!(cropped.dimensions(), (10, 5));
    }

    #[test]
    fn test_crop_fully_outside_is_empty() {
        let image = checker_image(100, 100);
        let result = crop_region(
            &image,
            CaptureRegion {
                x: 200,
                y: 10,
                width: 10,
                height: 10,
            },
        );
        assert!(matches!(result, Err(CropError::EmptyRegion { .. })));
    }

    #[test]
    fn test_crop_zero_size_is_empty() {
        let image = checker_image(100, 100);
        let result = crop_region(
            &image,
            CaptureRegion {
                x: 10,
                y: 10,
                width: 0,
                height: 20,
            },
        );
        assert!(matches!(result, Err(CropError::EmptyRegion { .. })));
    }
}
