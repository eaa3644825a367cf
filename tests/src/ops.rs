/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use pixmap_core::colorspace::ColorSpace;
use pixmap_core::options::DecoderOptions;
use pixmap_image::image::Image;
use pixmap_image::traits::OperationsTrait;
use pixmap_imageprocs::flip::{Flip, FlipDirection};
use pixmap_imageprocs::grayscale::RgbToGrayscale;
use pixmap_imageprocs::rotate::{Rotate, RotateDirection};
use pixmap_imageprocs::sepia::Sepia;
use pixmap_pnm::PnmVersions;

fn random_image(width: usize, height: usize) -> Image {
    let mut rng = nanorand::WyRand::new();
    let mut pixels = vec![0_u8; width * height * 3];

    rng.fill(&mut pixels);

    Image::from_interleaved_u8(&pixels, width, height, ColorSpace::RGB).unwrap()
}

#[test]
fn quarter_turns_cancel_out() {
    let original = random_image(19, 7);

    for directions in [
        [RotateDirection::Clockwise, RotateDirection::CounterClockwise],
        [RotateDirection::CounterClockwise, RotateDirection::Clockwise]
    ] {
        let mut image = original.clone();

        Rotate::new(directions[0]).execute(&mut image).unwrap();
        assert_eq!(image.dimensions(), (7, 19));

        Rotate::new(directions[1]).execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), original.dimensions());
        assert_eq!(image.channels_ref(), original.channels_ref());
    }
}

#[test]
fn double_flips_cancel_out() {
    let original = random_image(10, 11);

    for direction in [FlipDirection::Horizontal, FlipDirection::Vertical] {
        let mut image = original.clone();
        let flip = Flip::new(direction);

        flip.execute(&mut image).unwrap();
        flip.execute(&mut image).unwrap();

        assert_eq!(image.channels_ref(), original.channels_ref());
    }
}

#[test]
fn rotate_a_two_row_column_through_the_pipeline() {
    // rows=2, cols=1, pixels (10,20,30) and (40,50,60)
    let source = b"P3\n1 2\n255\n10\n20\n30\n40\n50\n60\n";

    let mut image = Image::decode_pnm(source, DecoderOptions::default()).unwrap();

    Rotate::new(RotateDirection::Clockwise)
        .execute(&mut image)
        .unwrap();

    // one row of two pixels, bottom pixel first
    assert_eq!(image.dimensions(), (2, 1));

    let mut sink = vec![];
    image.encode_pnm(&mut sink, PnmVersions::P3).unwrap();

    assert_eq!(sink, b"P3\n2 1\n255\n40\n50\n60\n10\n20\n30\n");
}

#[test]
fn grayscale_pipeline_writes_a_graymap() {
    let source = b"P3\n# graymap ahead\n1 2\n255\n255\n255\n255\n100\n150\n50\n";

    let mut image = Image::decode_pnm(source, DecoderOptions::default()).unwrap();

    RgbToGrayscale::new().execute(&mut image).unwrap();

    let mut ascii_sink = vec![];
    image.encode_pnm(&mut ascii_sink, PnmVersions::P2).unwrap();

    assert_eq!(ascii_sink, b"P2\n# graymap ahead\n1 2\n255\n255\n125\n");

    let mut raw_sink = vec![];
    image.encode_pnm(&mut raw_sink, PnmVersions::P5).unwrap();

    assert_eq!(raw_sink, b"P5\n# graymap ahead\n1 2\n255\n\xFF\x7D");
}

#[test]
fn grayscale_image_cannot_use_color_emitters() {
    let mut image = Image::decode_pnm(b"P3\n1 1\n255\n1 2 3\n", DecoderOptions::default()).unwrap();

    RgbToGrayscale::new().execute(&mut image).unwrap();

    let mut sink: Vec<u8> = vec![];
    assert!(image.encode_pnm(&mut sink, PnmVersions::P3).is_err());
    assert!(image.encode_pnm(&mut sink, PnmVersions::P6).is_err());
}

#[test]
fn sepia_saturates_white() {
    let source = b"P6\n1 1\n255\n\xFF\xFF\xFF";

    let mut image = Image::decode_pnm(source, DecoderOptions::default()).unwrap();

    Sepia::new().execute(&mut image).unwrap();

    assert_eq!(image.flatten_u8(), [255, 255, 238]);
}

#[test]
fn sepia_reads_original_values_for_every_output() {
    let mut image = random_image(16, 16);
    let original = image.flatten_u8();

    Sepia::new().execute(&mut image).unwrap();

    // every output channel must derive from the original pixel, a
    // partially updated read would diverge from this reference
    for (pixel, out) in original.chunks_exact(3).zip(image.flatten_u8().chunks_exact(3)) {
        let (r, g, b) = (
            f32::from(pixel[0]),
            f32::from(pixel[1]),
            f32::from(pixel[2])
        );

        assert_eq!(out[0], (0.393 * r + 0.769 * g + 0.189 * b).min(255.0) as u8);
        assert_eq!(out[1], (0.349 * r + 0.686 * g + 0.168 * b).min(255.0) as u8);
        assert_eq!(out[2], (0.272 * r + 0.534 * g + 0.131 * b).min(255.0) as u8);
    }
}
