/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use pixmap_core::options::DecoderOptions;
use pixmap_image::image::Image;
use pixmap_pnm::PnmVersions;

/// Build a P3 stream for the given interleaved pixels
fn build_ascii(width: usize, height: usize, comments: &[&str], pixels: &[u8]) -> Vec<u8> {
    let mut out = String::from("P3\n");

    for comment in comments {
        out.push_str(comment);
        out.push('\n');
    }
    out.push_str(&format!("{width} {height}\n255\n"));

    for pixel in pixels {
        out.push_str(&format!("{pixel}\n"));
    }
    out.into_bytes()
}

/// Build a P6 stream for the given interleaved pixels
fn build_raw(width: usize, height: usize, comments: &[&str], pixels: &[u8]) -> Vec<u8> {
    let mut out = String::from("P6\n");

    for comment in comments {
        out.push_str(comment);
        out.push('\n');
    }
    out.push_str(&format!("{width} {height}\n255\n"));

    let mut out = out.into_bytes();
    out.extend_from_slice(pixels);
    out
}

fn random_pixels(count: usize) -> Vec<u8> {
    let mut rng = nanorand::WyRand::new();
    let mut pixels = vec![0_u8; count];

    rng.fill(&mut pixels);
    pixels
}

#[test]
fn text_round_trip_reproduces_the_stream() {
    let pixels = random_pixels(5 * 3 * 3);
    let source = build_ascii(5, 3, &["# one", "# two"], &pixels);

    let image = Image::decode_pnm(&source, DecoderOptions::default()).unwrap();

    let mut sink = vec![];
    image.encode_pnm(&mut sink, PnmVersions::P3).unwrap();

    assert_eq!(sink, source);
}

#[test]
fn raw_round_trip_reproduces_the_stream() {
    let pixels = random_pixels(4 * 6 * 3);
    let source = build_raw(4, 6, &["# raw"], &pixels);

    let image = Image::decode_pnm(&source, DecoderOptions::default()).unwrap();

    let mut sink = vec![];
    image.encode_pnm(&mut sink, PnmVersions::P6).unwrap();

    assert_eq!(sink, source);
}

#[test]
fn both_variants_decode_to_the_same_image() {
    let pixels = random_pixels(7 * 2 * 3);

    let ascii = build_ascii(7, 2, &["# same logical image"], &pixels);
    let raw = build_raw(7, 2, &["# same logical image"], &pixels);

    let from_ascii = Image::decode_pnm(&ascii, DecoderOptions::default()).unwrap();
    let from_raw = Image::decode_pnm(&raw, DecoderOptions::default()).unwrap();

    assert_eq!(from_ascii.dimensions(), from_raw.dimensions());
    assert_eq!(from_ascii.colorspace(), from_raw.colorspace());
    assert_eq!(from_ascii.channels_ref(), from_raw.channels_ref());
    assert_eq!(
        from_ascii.metadata().comments(),
        from_raw.metadata().comments()
    );
    assert_eq!(
        from_ascii.metadata().max_value(),
        from_raw.metadata().max_value()
    );
}

#[test]
fn crossing_the_encoding_preserves_pixels() {
    let pixels = random_pixels(3 * 3 * 3);
    let source = build_ascii(3, 3, &[], &pixels);

    // text in, binary out
    let image = Image::decode_pnm(&source, DecoderOptions::default()).unwrap();

    let mut raw_sink = vec![];
    image.encode_pnm(&mut raw_sink, PnmVersions::P6).unwrap();

    // binary back in, text out
    let reloaded = Image::decode_pnm(&raw_sink, DecoderOptions::default()).unwrap();

    let mut ascii_sink = vec![];
    reloaded.encode_pnm(&mut ascii_sink, PnmVersions::P3).unwrap();

    assert_eq!(ascii_sink, source);
}

#[test]
fn unknown_magic_is_fatal() {
    let result = Image::decode_pnm(b"P9\n1 1\n255\n1 2 3\n", DecoderOptions::default());

    assert!(result.is_err());
}
