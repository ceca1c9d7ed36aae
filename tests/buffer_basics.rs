use egui::Color32;
use pixelpaint::buffer::{BACKGROUND, PixelBuffer};

#[test]
fn new_buffer_is_filled_with_the_given_color() {
    let buffer = PixelBuffer::new(7, 5, Color32::RED).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            assert_eq!(buffer.get(x, y), Some(Color32::RED));
        }
    }
}

#[test]
fn new_buffer_rejects_zero_dimensions() {
    assert!(PixelBuffer::new(0, 5, Color32::WHITE).is_err());
    assert!(PixelBuffer::new(5, 0, Color32::WHITE).is_err());
    assert!(PixelBuffer::new(0, 0, Color32::WHITE).is_err());
}

#[test]
fn set_and_get_roundtrip() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE).unwrap();
    assert!(buffer.set(2, 3, Color32::BLUE));
    assert_eq!(buffer.get(2, 3), Some(Color32::BLUE));
    // Neighbors are untouched
    assert_eq!(buffer.get(1, 3), Some(Color32::WHITE));
    assert_eq!(buffer.get(2, 2), Some(Color32::WHITE));
}

#[test]
fn out_of_bounds_access_is_rejected() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE).unwrap();
    let before = buffer.clone();

    assert_eq!(buffer.get(-1, 0), None);
    assert_eq!(buffer.get(0, -1), None);
    assert_eq!(buffer.get(4, 0), None);
    assert_eq!(buffer.get(0, 4), None);

    assert!(!buffer.set(-1, 0, Color32::RED));
    assert!(!buffer.set(4, 4, Color32::RED));
    assert_eq!(buffer, before);
}

#[test]
fn resize_preserves_content_and_fills_new_area() {
    let mut buffer = PixelBuffer::new(3, 3, Color32::WHITE).unwrap();
    buffer.set(1, 1, Color32::BLACK);

    let grown = buffer.resized(5, 4, BACKGROUND).unwrap();
    assert_eq!(grown.width(), 5);
    assert_eq!(grown.height(), 4);
    assert_eq!(grown.get(1, 1), Some(Color32::BLACK));
    // The newly exposed area is background
    assert_eq!(grown.get(4, 0), Some(BACKGROUND));
    assert_eq!(grown.get(0, 3), Some(BACKGROUND));
}

#[test]
fn resize_roundtrip_preserves_common_region() {
    let mut buffer = PixelBuffer::new(6, 6, Color32::WHITE).unwrap();
    for i in 0..6 {
        buffer.set(i, i, Color32::GREEN);
    }

    let shrunk = buffer.resized(4, 4, BACKGROUND).unwrap();
    let restored = shrunk.resized(6, 6, BACKGROUND).unwrap();

    // Everything inside the 4x4 common region survived the round trip
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(restored.get(x, y), buffer.get(x, y));
        }
    }
    // Content outside it was lost to the shrink
    assert_eq!(restored.get(5, 5), Some(BACKGROUND));
}

#[test]
fn resize_rejects_zero_dimensions_and_leaves_buffer_unchanged() {
    let mut buffer = PixelBuffer::new(3, 3, Color32::WHITE).unwrap();
    buffer.set(0, 0, Color32::RED);
    let before = buffer.clone();

    assert!(buffer.resized(0, 3, BACKGROUND).is_err());
    assert!(buffer.resized(3, 0, BACKGROUND).is_err());
    assert_eq!(buffer, before);
}

#[test]
fn fill_overwrites_every_pixel() {
    let mut buffer = PixelBuffer::new(3, 2, Color32::WHITE).unwrap();
    buffer.set(1, 1, Color32::BLACK);
    buffer.fill(Color32::GOLD);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(buffer.get(x, y), Some(Color32::GOLD));
        }
    }
}

#[test]
fn raw_view_matches_checked_accessors() {
    let mut buffer = PixelBuffer::new(3, 3, Color32::WHITE).unwrap();
    buffer.set(2, 1, Color32::from_rgb(10, 20, 30));

    let offset = buffer.index_of(2, 1);
    let raw = buffer.as_raw();
    assert_eq!(&raw[offset..offset + 4], &[10, 20, 30, 255]);
    assert_eq!(raw.len(), buffer.stride() * buffer.height() as usize);
}
