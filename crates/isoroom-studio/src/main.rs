//! Demo room: fills a cache with a handful of objects, compiles one frame and
//! prints what the render passes would receive.
//!
//! Usage: `isoroom-studio [log-filter] [asset=path.png ...]`

use std::path::Path;

use anyhow::{Context, Result, bail};
use image::{Rgba, RgbaImage};
use isoroom_engine::logging::{LoggingConfig, init_logging};
use isoroom_engine::paint::{BlendMode, Color, ImageColorSampler};
use isoroom_engine::{
    AccurateZ, ObjectId, RoomObjectCache, RoomObjectSprite, SortableSprite, SpriteType,
};

const POSTER_ASSET: &str = "external_image_wallitem_poster_64_a_0_0";

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let logging = if args.first().is_some_and(|a| !a.contains('=')) {
        LoggingConfig::with_filter(args.remove(0))
    } else {
        LoggingConfig::default()
    };
    init_logging(logging);

    let mut sampler = ImageColorSampler::new();
    sampler.insert_texture(
        POSTER_ASSET,
        RgbaImage::from_pixel(64, 64, Rgba([180, 40, 40, 255])),
    );
    for arg in args {
        let Some((name, path)) = arg.split_once('=') else {
            bail!("expected asset=path, got '{arg}'");
        };
        sampler
            .load_texture(name, Path::new(path))
            .with_context(|| format!("texture argument '{arg}'"))?;
    }
    log::info!("sampler ready with {} textures", sampler.texture_count());

    let mut cache = RoomObjectCache::new(AccurateZ::default()).with_sampler(sampler);
    populate(&mut cache)?;
    print_frame(&cache)?;

    cache.remove_object_cache("furni_2")?;
    log::info!("removed poster; {} objects left", cache.len()?);
    print_frame(&cache)?;

    cache.dispose();
    Ok(())
}

fn populate(cache: &mut RoomObjectCache) -> Result<()> {
    let room = cache.get_object_cache("room")?;
    room.set_object_id(ObjectId(0));
    room.set_sprites(vec![
        SortableSprite::new(
            RoomObjectSprite::named("floor").with_sprite_type(SpriteType::RoomPlane),
            0,
            0,
            0.0,
        ),
        SortableSprite::new(
            RoomObjectSprite::named("wall_left").with_sprite_type(SpriteType::RoomPlane),
            -64,
            -120,
            0.0,
        ),
    ]);

    let chair = cache.get_object_cache("furni_1")?;
    chair.set_object_id(ObjectId(1));
    chair.push_sprite(SortableSprite::new(
        RoomObjectSprite {
            color: Color::from_rgb(0x8B_5A2B),
            ..RoomObjectSprite::named("chair_64_a_2_0")
                .with_object_type("chair_basic")
                .with_size(42, 60)
                .with_direction(2)
        },
        32,
        16,
        1.5,
    ));
    chair.push_sprite(SortableSprite::new(
        RoomObjectSprite {
            blend_mode: BlendMode::from_name("add"),
            alpha: 96,
            ..RoomObjectSprite::named("chair_64_sd_2_0").with_size(42, 12)
        },
        32,
        60,
        0.1,
    ));

    let poster = cache.get_object_cache("furni_2")?;
    poster.set_object_id(ObjectId(2));
    poster.push_sprite(SortableSprite::new(
        RoomObjectSprite::named(POSTER_ASSET)
            .with_object_type("external_image_wallitem_poster")
            .with_tag("THUMBNAIL")
            .with_size(64, 64)
            .with_direction(4),
        -40,
        -90,
        2.0,
    ));

    Ok(())
}

fn print_frame(cache: &RoomObjectCache) -> Result<()> {
    match cache.get_sortable_sprite_list()? {
        None => println!("  (no sortable sprites)"),
        Some(list) => {
            for d in list {
                println!(
                    "  #{:<3} {:<40} ({},{},{:.2}) color={} blend={} skew={:?} frame={} avg={:?}",
                    d.object_id.0,
                    d.name,
                    d.x,
                    d.y,
                    d.z,
                    d.color,
                    d.blend_mode,
                    d.skew,
                    d.frame,
                    d.average_color.map(Color::rgb),
                );
            }
        }
    }

    let planes = cache.get_plane_sortable_sprites()?;
    let names: Vec<&str> = planes.iter().map(|p| p.sprite.name.as_str()).collect();
    println!("  planes: {}", names.join(", "));
    println!();
    Ok(())
}
