use rgb::alt::ARGB8;
use rgb::RGB8;

// Packed 0xAARRGGBB, as Android stores them
pub const BLACK: i32 = 0xFF00_0000_u32 as i32;
pub const WHITE: i32 = 0xFFFF_FFFF_u32 as i32;
pub const RED: i32 = 0xFFFF_0000_u32 as i32;
pub const GREEN: i32 = 0xFF00_FF00_u32 as i32;
pub const BLUE: i32 = 0xFF00_00FF_u32 as i32;

/// Formats a packed color as `#RRGGBB`, ignoring the alpha byte.
pub fn rgb_color_to_hex_string(rgb_color: i32) -> String {
    format!("#{:06X}", rgb_color & 0x00FF_FFFF)
}

pub fn rgb8_to_hex_string(color: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

pub fn unpack_argb(color: i32) -> ARGB8 {
    let [a, r, g, b] = (color as u32).to_be_bytes();
    ARGB8 { a, r, g, b }
}

pub fn pack_argb(color: ARGB8) -> i32 {
    u32::from_be_bytes([color.a, color.r, color.g, color.b]) as i32
}
