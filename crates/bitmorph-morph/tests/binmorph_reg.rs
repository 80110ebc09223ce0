//! Binary morphology regression test
//!
//! Checks dilation, erosion and isolated-pixel filtering against the
//! pixel-by-pixel reference on random images of awkward widths, plus the
//! containment properties of the compositions.
//!
//! Run with:
//! ```
//! cargo test -p bitmorph-morph --test binmorph_reg
//! ```

use bitmorph_core::{ExecutionStrategy, PackedImage};
use bitmorph_morph::{
    close, dilate, dilate_with, erode, erode_with, filter_isolated, gradient, open, top_hat,
};
use bitmorph_test::{RegParams, ascii, full_image, random_image, reference};

// Widths straddling byte boundaries
const SIZES: [(u32, u32); 7] = [(2, 2), (7, 3), (8, 8), (9, 5), (16, 4), (17, 11), (63, 21)];

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");

    for (i, &(w, h)) in SIZES.iter().enumerate() {
        for density in [0.2, 0.5, 0.8] {
            let image = random_image(w, h, density, 1000 + i as u64).unwrap();

            let d = dilate(&image).unwrap();
            let e = erode(&image).unwrap();
            let f = filter_isolated(&image).unwrap();
            rp.compare_images(&reference::dilate(&image), &d);
            rp.compare_images(&reference::erode(&image), &e);
            rp.compare_images(&reference::filter_isolated(&image), &f);

            rp.compare_images(&d, &dilate_with(&image, ExecutionStrategy::Serial).unwrap());
            rp.compare_images(&e, &erode_with(&image, ExecutionStrategy::Serial).unwrap());

            // x <= dilate(x), erode(x) <= x, dilate(erode(x)) <= dilate(x)
            rp.compare_bool(true, image.is_subset_of(&d).unwrap(), "extensive dilation");
            rp.compare_bool(true, e.is_subset_of(&image).unwrap(), "anti-extensive erosion");
            let de = dilate(&e).unwrap();
            rp.compare_bool(true, de.is_subset_of(&d).unwrap(), "opening below dilation");
            rp.compare_bool(true, f.is_subset_of(&image).unwrap(), "filter removes only");
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn binmorph_full_image_reg() {
    let mut rp = RegParams::new("binmorph_full");

    let image = full_image(5, 5).unwrap();
    let eroded = erode(&image).unwrap();
    rp.compare_images(
        &ascii(
            "
            .....
            .###.
            .###.
            .###.
            .....
            ",
        ),
        &eroded,
    );
    rp.compare_images(
        &ascii(
            "
            .###.
            #####
            #####
            #####
            .###.
            ",
        ),
        &dilate(&eroded).unwrap(),
    );

    // dilation of a full image is the full image; erosion keeps the interior
    for &(w, h) in &SIZES {
        let full = full_image(w, h).unwrap();
        rp.compare_images(&full, &dilate(&full).unwrap());
        let expected = (w as f64 - 2.0) * (h as f64 - 2.0);
        rp.compare_values(expected, erode(&full).unwrap().count_pixels() as f64, 0.0);
    }

    assert!(rp.cleanup());
}

#[test]
fn binmorph_compositions_reg() {
    let mut rp = RegParams::new("binmorph_compositions");

    let image = ascii(
        "
        ..........
        .####.....
        .####..#..
        .####.###.
        .#.....#..
        ..........
        ",
    );

    let opened = open(&image).unwrap();
    let closed = close(&image).unwrap();
    let hat = top_hat(&image).unwrap();
    let grad = gradient(&image).unwrap();

    rp.compare_bool(true, opened.is_subset_of(&image).unwrap(), "opening inside");
    rp.compare_bool(true, image.is_subset_of(&closed).unwrap(), "closing outside");
    rp.compare_images(&image.subtract(&opened).unwrap(), &hat);
    rp.compare_images(
        &dilate(&image)
            .unwrap()
            .subtract(&erode(&image).unwrap())
            .unwrap(),
        &grad,
    );

    // the plus sign is the structuring element itself and survives;
    // the block loses its four corners and the spur disappears
    rp.compare_images(
        &ascii(
            "
            ..........
            ..##......
            .####..#..
            ..##..###.
            .......#..
            ..........
            ",
        ),
        &opened,
    );

    assert!(rp.cleanup());
}

#[test]
fn binmorph_preconditions_reg() {
    let tiny = PackedImage::new(1, 1).unwrap();
    assert!(dilate(&tiny).is_err());
    assert!(erode(&tiny).is_err());
    assert!(filter_isolated(&tiny).is_err());
    assert!(close(&tiny).is_err());
    assert!(gradient(&tiny).is_err());
    assert!(top_hat(&tiny).is_err());
}
