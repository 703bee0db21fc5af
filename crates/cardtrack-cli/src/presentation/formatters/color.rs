use owo_colors::OwoColorize;

/// The named colors a board badge may carry, as the host renders them.
const NAMED_COLORS: [(&str, (u8, u8, u8)); 11] = [
    ("blue", (0x00, 0x79, 0xbf)),
    ("green", (0x61, 0xbd, 0x4f)),
    ("orange", (0xff, 0x9f, 0x1a)),
    ("red", (0xeb, 0x5a, 0x46)),
    ("yellow", (0xf2, 0xd6, 0x00)),
    ("purple", (0xc3, 0x77, 0xe0)),
    ("pink", (0xff, 0x78, 0xcb)),
    ("sky", (0x00, 0xc2, 0xe0)),
    ("lime", (0x51, 0xe8, 0x98)),
    ("light-gray", (0xc1, 0xc7, 0xd0)),
    ("black", (0x34, 0x45, 0x63)),
];

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a named badge color.
pub fn parse_color(raw: &str) -> Option<(u8, u8, u8)> {
    let raw = raw.trim();

    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = raw
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = args
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match channels[..] {
            [r, g, b] => Some((r, g, b)),
            _ => None,
        };
    }

    let lower = raw.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// A badge as terminal text. With `colored`, the text sits on the badge's
/// background color; otherwise the color is printed next to it.
pub fn paint_badge(text: &str, color: &str, colored: bool) -> String {
    match parse_color(color) {
        Some((r, g, b)) if colored => {
            let label = format!(" {} ", text);
            label.on_truecolor(r, g, b).white().bold().to_string()
        }
        _ => format!("[{}] ({})", text, color),
    }
}
