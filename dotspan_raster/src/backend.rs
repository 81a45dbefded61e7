// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use dotspan_card::{CardItem, CardScene, IconSlot, TextAlign, TextItem};
use peniko::{Blob, ImageAlphaType, ImageData, ImageFormat, ImageSampler};
use skrifa::FontRef;
use vello_cpu::kurbo::{
    Affine as CpuAffine, Circle, Rect as CpuRect, RoundedRect, Shape as CpuShape,
};
use vello_cpu::{
    Image as CpuImage, ImageSource, Pixmap, RenderContext, RenderMode, RenderSettings,
};

use crate::bitmap::{CardBitmap, RasterError};
use crate::text::{FontSet, line_path, shape_line};

const PATH_TOLERANCE: f64 = 0.1;

/// Rasterizes a card scene into an RGBA bitmap.
///
/// All scene coordinates are logical; the scene's `scale` is applied as a
/// single transform so text, dots, and icons stay crisp at any density. Text
/// uses the scene's font choice resolved through `fonts`; when the family has
/// no bytes (or the bytes are not a parseable font) text items are skipped
/// and everything else still renders.
///
/// Fails only when the device-pixel dimensions exceed the renderer's
/// addressable range.
pub fn render_card(scene: &CardScene, fonts: &FontSet<'_>) -> Result<CardBitmap, RasterError> {
    let pixel_width = scene.pixel_width();
    let pixel_height = scene.pixel_height();
    let (Ok(width), Ok(height)) = (u16::try_from(pixel_width), u16::try_from(pixel_height)) else {
        return Err(RasterError::SceneTooLarge {
            width: pixel_width,
            height: pixel_height,
        });
    };

    let settings = RenderSettings {
        // Force the u8 pipeline so output bytes are stable across
        // configurations.
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    };
    let mut ctx = RenderContext::new_with(width, height, settings);

    // Background covers the full device surface, including any fractional
    // edge the ceil'd pixel size adds beyond the logical bounds.
    ctx.set_transform(CpuAffine::IDENTITY);
    ctx.set_paint(scene.background);
    ctx.fill_rect(&CpuRect::new(
        0.0,
        0.0,
        f64::from(pixel_width),
        f64::from(pixel_height),
    ));

    let base = CpuAffine::scale(scene.scale);
    ctx.set_transform(base);

    let font_bytes = fonts.bytes_for(scene.font);
    for item in &scene.items {
        match item {
            CardItem::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_paint(*color);
                let circle = Circle::new((center.x, center.y), *radius);
                ctx.fill_path(&circle.to_path(PATH_TOLERANCE));
            }
            CardItem::RoundedRect {
                rect,
                radius,
                color,
            } => {
                ctx.set_paint(*color);
                let rounded = RoundedRect::from_rect(
                    CpuRect::new(rect.x0, rect.y0, rect.x1, rect.y1),
                    *radius,
                );
                ctx.fill_path(&rounded.to_path(PATH_TOLERANCE));
            }
            CardItem::Text(text) => {
                draw_text_item(&mut ctx, base, text, font_bytes);
            }
        }
    }

    ctx.flush();
    let mut pixmap = Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    let unpremul = pixmap.take_unpremultiplied();
    let mut rgba = Vec::with_capacity(unpremul.len() * 4);
    for p in unpremul {
        rgba.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    Ok(CardBitmap::from_parts(pixel_width, pixel_height, rgba))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "font sizes are small logical pixel values, f32 is plenty"
)]
fn draw_text_item(
    ctx: &mut RenderContext,
    base: CpuAffine,
    item: &TextItem,
    font_bytes: Option<&[u8]>,
) {
    let font = font_bytes.and_then(|bytes| FontRef::new(bytes).ok());
    let size_px = item.size as f32;
    let shaped = font.as_ref().map(|f| shape_line(f, &item.content, size_px));

    let text_width = shaped.as_ref().map_or(0.0, |s| f64::from(s.width));
    let icon_width = item.icon.as_ref().map_or(0.0, |icon| {
        // The gap only exists when text follows the icon.
        icon.size + if text_width > 0.0 { icon.gap } else { 0.0 }
    });
    let left = match item.align {
        TextAlign::Left => item.anchor.x,
        TextAlign::Center => item.anchor.x - (icon_width + text_width) / 2.0,
    };

    if let Some(icon) = &item.icon {
        draw_icon(ctx, base, icon, left, item.anchor.y);
    }

    if let (Some(font), Some(shaped)) = (font.as_ref(), shaped.as_ref())
        && !shaped.glyphs.is_empty()
    {
        ctx.set_paint(item.color);
        ctx.set_transform(base * CpuAffine::translate((left + icon_width, item.anchor.y)));
        ctx.fill_path(&line_path(font, shaped, size_px));
        ctx.set_transform(base);
    }
}

fn draw_icon(ctx: &mut RenderContext, base: CpuAffine, icon: &IconSlot, left: f64, baseline: f64) {
    let image = &icon.image;
    if image.width() == 0 || image.height() == 0 || icon.size <= 0.0 {
        return;
    }
    let image_data = ImageData {
        data: Blob::from(image.rgba().to_vec()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width: image.width(),
        height: image.height(),
    };
    let paint = CpuImage {
        image: ImageSource::from_peniko_image_data(&image_data),
        sampler: ImageSampler::default(),
    };

    // Scale the natural-size image into its icon box, resting on the
    // baseline.
    let sx = icon.size / f64::from(image.width());
    let sy = icon.size / f64::from(image.height());
    ctx.set_paint(paint);
    ctx.set_transform(
        base * CpuAffine::translate((left, baseline - icon.size))
            * CpuAffine::scale_non_uniform(sx, sy),
    );
    ctx.fill_rect(&CpuRect::new(
        0.0,
        0.0,
        f64::from(image.width()),
        f64::from(image.height()),
    ));
    ctx.set_transform(base);
}
