use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vestiary", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the garment catalog and saved outfits.
    Wardrobe(WardrobeArgs),
    /// Compose an outfit on the avatar and emit the render list as JSON.
    Project(ProjectArgs),
}

#[derive(Parser, Debug)]
struct WardrobeArgs {
    /// Input catalog JSON.
    #[arg(long = "catalog")]
    catalog_path: PathBuf,

    /// Restrict to one category.
    #[arg(long, value_enum)]
    category: Option<CategoryChoice>,

    /// Case-insensitive search over garment name and brand.
    #[arg(long)]
    search: Option<String>,

    /// Restrict to these brands (repeatable).
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Restrict to these colors (repeatable).
    #[arg(long = "color")]
    colors: Vec<String>,

    /// Show wishlisted garments only.
    #[arg(long)]
    wishlist: bool,

    /// Show new arrivals only.
    #[arg(long = "new")]
    new_arrivals: bool,

    /// Show up to three pairing recommendations for this garment instead.
    #[arg(long = "pair-with", value_name = "ID")]
    pair_with: Option<String>,

    /// List saved outfits instead of garments.
    #[arg(long)]
    outfits: bool,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Input catalog JSON.
    #[arg(long = "catalog")]
    catalog_path: PathBuf,

    /// Avatar model path (relative).
    #[arg(long, default_value = "avatar.glb")]
    avatar: String,

    /// Saved outfit to wear at session start (dangling references are skipped).
    #[arg(long)]
    outfit: Option<String>,

    /// Catalog item to stage at session start (unknown ids are skipped).
    #[arg(long)]
    item: Option<String>,

    /// Stage these garments, in order (repeatable).
    #[arg(long = "stage", value_name = "ID")]
    stage: Vec<String>,

    /// Wear these garments, in order (repeatable).
    #[arg(long = "wear", value_name = "ID")]
    wear: Vec<String>,

    /// Attach garment physics hints to the render list.
    #[arg(long)]
    physics: bool,

    /// Move the avatar by this delta before projecting.
    #[arg(long = "move", value_name = "X,Y,Z")]
    move_delta: Option<String>,

    /// Turn the avatar by this yaw angle (radians) before projecting.
    #[arg(long, value_name = "RADIANS", allow_hyphen_values = true)]
    rotate: Option<f32>,

    /// Output render-list JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryChoice {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl From<CategoryChoice> for vestiary::Category {
    fn from(choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::Tops => vestiary::Category::Tops,
            CategoryChoice::Bottoms => vestiary::Category::Bottoms,
            CategoryChoice::Dresses => vestiary::Category::Dresses,
            CategoryChoice::Outerwear => vestiary::Category::Outerwear,
            CategoryChoice::Shoes => vestiary::Category::Shoes,
            CategoryChoice::Accessories => vestiary::Category::Accessories,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Wardrobe(args) => cmd_wardrobe(args),
        Command::Project(args) => cmd_project(args),
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<vestiary::Catalog> {
    let source = vestiary::JsonCatalogFile::new(path);
    Ok(vestiary::Catalog::from_source(&source)?)
}

fn cmd_wardrobe(args: WardrobeArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog_path)?;

    if args.outfits {
        for outfit in catalog.outfits() {
            println!(
                "{}  {} ({} garments, saved {})",
                outfit.id,
                outfit.name,
                outfit.garment_ids.len(),
                outfit.created_at.format("%Y-%m-%d"),
            );
        }
        eprintln!("{} outfits", catalog.outfits().len());
        return Ok(());
    }

    if let Some(anchor) = &args.pair_with {
        // Recommendations against a fresh session: pure catalog complements.
        let session = vestiary::FittingSession::new(vestiary::AvatarConfig::default())?;
        let picks = session.recommendations_for(&catalog, &anchor.as_str().into())?;
        for garment in &picks {
            println!("{}", garment_line(garment));
        }
        eprintln!("{} recommendations for '{anchor}'", picks.len());
        return Ok(());
    }

    let filter = vestiary::WardrobeFilter {
        category: args.category.map(Into::into),
        search: args.search,
        brands: args.brands,
        colors: args.colors,
        wishlist_only: args.wishlist,
        new_only: args.new_arrivals,
    };
    let rows = vestiary::filter_garments(&catalog, &filter);
    for garment in &rows {
        println!("{}", garment_line(garment));
    }
    eprintln!("{} of {} garments", rows.len(), catalog.len());
    Ok(())
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog_path)?;

    let avatar = vestiary::AvatarConfig {
        model_ref: args.avatar,
        ..Default::default()
    };
    let mut session = vestiary::FittingSession::new(avatar)?;

    let bootstrap = vestiary::SessionBootstrap {
        initial_item: args.item.map(Into::into),
        initial_outfit: args.outfit.map(Into::into),
    };
    bootstrap.apply(&mut session, &catalog);

    for id in &args.stage {
        session.stage(&catalog, &id.as_str().into())?;
    }
    for id in &args.wear {
        session.wear(&catalog, &id.as_str().into())?;
    }

    session.set_physics_enabled(args.physics);

    if let Some(delta) = &args.move_delta {
        session.move_pose(parse_vec3(delta)?);
    }
    if let Some(yaw) = args.rotate {
        session.rotate_pose(yaw);
    }

    let list = vestiary::project(&session, &catalog)?;
    let mut json = serde_json::to_string_pretty(&list).context("serialize render list")?;
    json.push('\n');

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write render list '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{json}"),
    }
    Ok(())
}

fn garment_line(garment: &vestiary::Garment) -> String {
    let mut badges = String::new();
    if garment.is_new {
        badges.push_str(" [new]");
    }
    if garment.is_wishlisted {
        badges.push_str(" [wishlist]");
    }
    format!(
        "{} {}  {} ({}, {}){}",
        vestiary::category_glyph(garment.category),
        garment.id,
        garment.name,
        garment.brand,
        garment.color,
        badges,
    )
}

fn parse_vec3(s: &str) -> anyhow::Result<vestiary::Vec3> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        anyhow::bail!("expected three comma-separated components, got '{s}'");
    };
    let x = f32::from_str(x).with_context(|| format!("parse x component of '{s}'"))?;
    let y = f32::from_str(y).with_context(|| format!("parse y component of '{s}'"))?;
    let z = f32::from_str(z).with_context(|| format!("parse z component of '{s}'"))?;
    Ok(vestiary::Vec3::new(x, y, z))
}
