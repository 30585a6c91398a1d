//! Domain-critical regression tests for pixel-quant.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use image::{Rgba, RgbaImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::api::{MosaicRenderer, PixelArtRenderer};
    use crate::color::ColorVec;
    use crate::palette::{build_palette, sample_colors, Palette};
    use crate::tile::{Tile, TileLibrary};

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }

    fn varied(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            Rgba([
                (x * 255 / w.max(1)) as u8,
                (y * 255 / h.max(1)) as u8,
                ((x + y) * 7 % 256) as u8,
                255,
            ])
        })
    }

    // ========================================================================
    // Palette learning
    // ========================================================================

    /// If this breaks, it means: the k >= n shortcut is padding, dropping or
    /// reordering samples. Four solid corpus images sampled once each must give
    /// back exactly their four colors, whatever the seed.
    #[test]
    fn test_four_solid_images_passthrough() {
        let corpus = [
            solid(10, 10, [255, 0, 0]),
            solid(10, 10, [0, 255, 0]),
            solid(10, 10, [0, 0, 255]),
            solid(10, 10, [255, 255, 0]),
        ];
        let samples: Vec<ColorVec> = corpus.iter().flat_map(|img| sample_colors(img, 1)).collect();
        assert_eq!(samples.len(), 4);

        for seed in [0, 1, 99, 12345] {
            let palette = build_palette(&samples, 4, 10, &mut StdRng::seed_from_u64(seed));
            assert_eq!(
                palette,
                vec![
                    ColorVec::from_u8(255, 0, 0),
                    ColorVec::from_u8(0, 255, 0),
                    ColorVec::from_u8(0, 0, 255),
                    ColorVec::from_u8(255, 255, 0),
                ],
                "seed {seed}"
            );
        }
    }

    /// If this breaks, it means: centroids escaped the convex hull of the
    /// samples (bad mean or stale reinit), producing colors no input had.
    #[test]
    fn test_centroids_bounded_by_samples() {
        let img = varied(97, 61);
        let samples = sample_colors(&img, 2_000);
        let palette = build_palette(&samples, 12, 40, &mut StdRng::seed_from_u64(3));

        assert_eq!(palette.len(), 12);
        for c in &palette {
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=255.0).contains(&v), "component {v} out of range");
            }
        }
    }

    // ========================================================================
    // Pixel-art rendering
    // ========================================================================

    /// If this breaks, it means: the same-size downsample or the block
    /// upscale is blending pixels. An image already made of palette colors
    /// must come back unchanged at scale 1.
    #[test]
    fn test_exact_palette_image_round_trips() {
        let white = Rgba([255, 255, 255, 255]);
        let black = Rgba([0, 0, 0, 255]);
        let src = RgbaImage::from_fn(2, 2, |_, y| if y == 0 { white } else { black });

        let palette = Palette::new(vec![
            ColorVec::from_u8(255, 255, 255),
            ColorVec::from_u8(0, 0, 0),
        ])
        .unwrap();
        let out = PixelArtRenderer::new(palette)
            .cells(2, 2)
            .upscale(1)
            .render(&src)
            .unwrap();

        assert_eq!(out, src);
    }

    /// If this breaks, it means: the upscale is interpolating (soft edges) or
    /// quantized colors are not being taken from the palette.
    #[test]
    fn test_every_block_flat_palette_color() {
        let src = varied(120, 80);
        let samples = sample_colors(&src, 1_000);
        let colors = build_palette(&samples, 6, 40, &mut StdRng::seed_from_u64(11));
        let palette = Palette::new(colors).unwrap();
        let allowed: Vec<Rgba<u8>> = palette.colors().iter().map(|c| c.to_rgba()).collect();

        let (cells_wide, upscale) = (12, 5);
        let out = PixelArtRenderer::new(palette)
            .cells(cells_wide, 0)
            .upscale(upscale)
            .render(&src)
            .unwrap();

        let cells_high = 8; // round(12 * 80 / 120)
        assert_eq!(out.dimensions(), (cells_wide * upscale, cells_high * upscale));

        for cy in 0..cells_high {
            for cx in 0..cells_wide {
                let first = *out.get_pixel(cx * upscale, cy * upscale);
                assert!(allowed.contains(&first), "block ({cx},{cy}) is {first:?}");
                for dy in 0..upscale {
                    for dx in 0..upscale {
                        assert_eq!(
                            *out.get_pixel(cx * upscale + dx, cy * upscale + dy),
                            first,
                            "block ({cx},{cy}) is not flat"
                        );
                    }
                }
            }
        }
    }

    // ========================================================================
    // Mosaic rendering
    // ========================================================================

    /// If this breaks, it means: tiles are being blended, scaled, or placed
    /// off-grid. Every tile-sized block must equal one library thumbnail.
    #[test]
    fn test_every_block_is_a_tile() {
        let tile_size = 4;
        let library = TileLibrary::new(
            [[200u8, 30, 30], [30, 200, 30], [30, 30, 200], [220, 220, 220]]
                .iter()
                .map(|&rgb| {
                    // Source with a gradient so thumbnails are not flat
                    let src = RgbaImage::from_fn(16, 16, |x, y| {
                        Rgba([
                            rgb[0].saturating_add(x as u8),
                            rgb[1].saturating_add(y as u8),
                            rgb[2],
                            255,
                        ])
                    });
                    Tile::from_image(&src, tile_size).unwrap()
                })
                .collect(),
        )
        .unwrap();

        let (grid_wide, grid_high) = (7, 5);
        let out = MosaicRenderer::new(library.clone())
            .grid(grid_wide, grid_high)
            .render(&varied(70, 50))
            .unwrap();
        assert_eq!(out.dimensions(), (grid_wide * tile_size, grid_high * tile_size));

        for cy in 0..grid_high {
            for cx in 0..grid_wide {
                let matches_some_tile = library.tiles().iter().any(|tile| {
                    (0..tile_size).all(|y| {
                        (0..tile_size).all(|x| {
                            out.get_pixel(cx * tile_size + x, cy * tile_size + y)
                                == tile.image().get_pixel(x, y)
                        })
                    })
                });
                assert!(matches_some_tile, "block ({cx},{cy}) is not a library tile");
            }
        }
    }

    // ========================================================================
    // Sharing across workers
    // ========================================================================

    /// If this breaks, it means: a palette, library or renderer picked up
    /// interior mutability and can no longer be shared across worker threads.
    #[test]
    fn test_shared_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Palette>();
        assert_send_sync::<TileLibrary>();
        assert_send_sync::<PixelArtRenderer>();
        assert_send_sync::<MosaicRenderer>();
    }

    /// If this breaks, it means: rendering depends on hidden state, so two
    /// threads rendering the same image could disagree.
    #[test]
    fn test_parallel_renders_agree() {
        let palette = Palette::new(vec![
            ColorVec::from_u8(0, 0, 0),
            ColorVec::from_u8(128, 64, 32),
            ColorVec::from_u8(255, 255, 255),
        ])
        .unwrap();
        let renderer = PixelArtRenderer::new(palette).cells(10, 0).upscale(3);
        let src = varied(50, 40);

        let expected = renderer.render(&src).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| renderer.render(&src).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
