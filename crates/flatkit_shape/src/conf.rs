//! Fixed listing constants: brand, templates, color and print-type tables, copy.

/// Maximum listing title length accepted by the marketplace.
pub const N_LEN_TITLE_MAX: usize = 255;

/// Brand written on every listing.
pub const C_BRAND: &str = "Stickalz";

/// Field that carries the variant part number; rows are ordered on it.
pub const C_HEADER_MODEL_NUMBER: &str = "Manufacturer Model Number";
/// Print type whose rows are written first.
pub const C_PRINT_TYPE_FIRST: &str = "Peel-n-Stick";

////////////////////////////////////////////////////////////////////////////////
// #region Decals

/// Decal template sheet.
pub const C_DECAL_SHEET_NAME: &str = "3757 - Wall Stickers";
/// Decal template file, relative to the working directory.
pub const C_DECAL_TEMPLATE_PATH: &str = "assets/decal_template.xlsx";

/// Decal colors, in listing order.
pub const TUP_DECAL_COLORS: [&str; 22] = [
    "White",
    "Grey",
    "Red",
    "Orange",
    "Yellow",
    "Burgundy",
    "Brown",
    "Beige",
    "Lime Green",
    "Green",
    "Dark Green",
    "Teal",
    "Mint",
    "Ice Blue",
    "Royal Blue",
    "Navy",
    "Purple",
    "Lilac",
    "Soft Pink",
    "Hot Pink",
    "Metallic Silver",
    "Metallic Gold",
];

/// Color written when the design is not split into colors.
pub const C_COLOR_MULTI: &str = "Multicolor";

/// Image 2 used when no second design image is given.
pub const C_DECAL_IMAGE_2_FALLBACK: &str = "https://www.dropbox.com/scl/fi/cjr63aj97m7j5k9aavr9h/st-4x-100.jpg?rlkey=kv5j0uhzxwp1sy5fh422c6234&st=mmjk6rna&dl=0";
/// Image 3 for color-variant designs (color chart).
pub const C_DECAL_IMAGE_3_COLORS: &str = "https://www.dropbox.com/scl/fi/627uc1b3muuerff3tk159/c-1-e-4x-100-2.jpg?rlkey=o4mfzcc652qesm3rod9tjtiq2&st=eif1qgo5&dl=0";
/// Image 3 for single-color designs (easy application).
pub const C_DECAL_IMAGE_3_DEFAULT: &str = "https://www.dropbox.com/scl/fi/dww9g9aythhwjru7vjp4l/ev-4x-100.jpg?rlkey=kwui3vqtkkhd51zq14g8o3my4&st=2s1y3jtt&dl=0";

pub const C_DECAL_DESCRIPTION: &str = "Decorate your home with beautiful and affordable vinyl decals for your walls. It is the newest home decor trend. It's easy to apply and really makes a room look elegant. Without much effort and cost you can decorate and style your home or any other surface. Putting up these paint-lookalike stickers, vinyl decals will completely change the way your accommodation looks.";
pub const C_DECAL_BULLET_3: &str = "Quick installation with easy-to-follow instructions.";
pub const C_DECAL_BULLET_4: &str = "Wall decals are suitable for a wide range of surfaces, from walls and doors to windows and even cars.";
pub const C_DECAL_BULLET_5: &str =
    "UV protected coating ensures they never fade, preserving their allure.";
pub const C_DECAL_SURFACES: &str = "Multi-Surface;Flat Surface;Glass Wall;Stainless Steel;Existing Tile;Chalkboard;Appliance;Mirror;Acrylic Panel;Laminate;Plywood Wall;Drywall;Ceramic Tile Wall;Concrete;Stone Wall";
pub const C_DECAL_ROOMS: &str =
    "Bedroom;Living Room;Nursery;Home Office;Playroom;School Classroom;Art School";
pub const C_DECAL_DURABILITY: &str = "Water Resistant;Fade Resistant;Heat Resistant;Stain Resistant;Tip Resistant;Waterproof;Weather Resistant";

/// Supplier lead time for decals, business-day hours.
pub const N_DECAL_LEAD_TIME_HOURS: u32 = 48;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Wallpapers

/// Wallpaper template sheet.
pub const C_WALLPAPER_SHEET_NAME: &str = "6161 - Wallpaper";
/// Wallpaper template file, relative to the working directory.
pub const C_WALLPAPER_TEMPLATE_PATH: &str = "assets/wallpaper_template.xlsx";

/// Material properties of one wallpaper print type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecPrintType {
    /// Print type name, also the part number suffix.
    pub name: &'static str,
    /// Wallpaper material.
    pub material: &'static str,
    /// Application type.
    pub application: &'static str,
    /// Removal type.
    pub removal: &'static str,
}

/// Wallpaper print types, in listing order.
pub const TUP_WALLPAPER_PRINT_TYPES: [SpecPrintType; 2] = [
    SpecPrintType {
        name: "Peel-n-Stick",
        material: "Vinyl",
        application: "Self-Adhesive",
        removal: "Peelable",
    },
    SpecPrintType {
        name: "Non-Woven",
        material: "Non-Woven",
        application: "Non-Pasted",
        removal: "Strippable",
    },
];

/// Material that carries the surcharge.
pub const C_MATERIAL_SURCHARGED: &str = "Non-Woven";
/// Prices below this are never surcharged.
pub const N_PRICE_SURCHARGE_MIN: f64 = 10.0;
/// Surcharge added to surcharged materials.
pub const N_PRICE_SURCHARGE: f64 = 10.0;

pub const TUP_WALLPAPER_DESCRIPTION: [&str; 3] = [
    "Transform your space effortlessly with our premium wallpaper, available in both Peel and Stick and Non-Woven options. Whether you're decorating a living room, nursery, office, or hallway, these high-quality wall murals bring personality and depth to any interior. Easy to install and remove, our wallpapers are perfect for renters and homeowners alike.",
    "Crafted with vivid colors and detailed designs, they create a stunning focal point in minutes \u{2014} no professional help needed. Whether you choose the self-adhesive peel and stick version for a mess-free setup, or the traditional non-woven paper for a classic application, you\u{2019}ll enjoy a smooth finish that elevates your walls.",
    "Bring art, nature, fantasy, or modern minimalism into your home \u{2014} without the mess of paint or the cost of renovations.",
];
pub const C_WALLPAPER_BULLET_3: &str =
    "Quick and easy installation with included step-by-step instructions.";
pub const C_WALLPAPER_BULLET_4: &str =
    "Suitable for smooth surfaces such as painted walls, glass, mirrors, and doors.";
pub const C_WALLPAPER_BULLET_5: &str =
    "UV-protected and fade-resistant coating ensures long-lasting color vibrancy.";
pub const C_WALLPAPER_BULLET_6: &str =
    "Removable and leaves no sticky residue \u{2014} ideal for renters and temporary d\u{e9}cor.";
pub const C_WALLPAPER_BULLET_7: &str = "Adds personality and atmosphere to any space \u{2014} from kids' rooms to living areas and offices.";
pub const C_WALLPAPER_DURABILITY: &str = "Mold / Mildew Resistant;Water Resistant;Fade Resistant;Heat Resistant;Non-Porous;Non-Staining";
pub const C_WALLPAPER_USE: &str = "Non Residential Use; Residential Use";

/// Supplier lead time for wallpapers, business-day hours.
pub const N_WALLPAPER_LEAD_TIME_HOURS: u32 = 96;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Shared

pub const C_COUNTRY: &str = "United States";
pub const C_DOES_NOT_APPLY: &str = "Does Not Apply";
pub const C_SHIP_TYPE: &str = "Small Parcel";
pub const N_FREIGHT_CLASS: u32 = 400;
pub const C_WARRANTY_LENGTH: &str = "30 Days";
pub const C_WARRANTY_DETAILS: &str = "Defects Only;Failure to follow recommended care will void product warranty;Consumer misuse not covered;Satisfaction Guaranteed";

// #endregion
////////////////////////////////////////////////////////////////////////////////
