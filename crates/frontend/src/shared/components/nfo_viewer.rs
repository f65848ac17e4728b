//! Monospace viewer for NFO rule text with search, zoom and copy.

use leptos::prelude::*;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::toast::ToastBus;

pub const MIN_ZOOM: u32 = 50;
pub const MAX_ZOOM: u32 = 200;
const ZOOM_STEP: u32 = 10;

pub fn zoom_in(zoom: u32) -> u32 {
    (zoom + ZOOM_STEP).min(MAX_ZOOM)
}

pub fn zoom_out(zoom: u32) -> u32 {
    zoom.saturating_sub(ZOOM_STEP).max(MIN_ZOOM)
}

/// CP437 glyphs for bytes 0x80..=0xFF.
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Text for display from raw NFO bytes. UTF-8 input is kept as is,
/// anything else is read as CP437.
pub fn decode_nfo(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes
            .iter()
            .map(|&b| if b < 0x80 { b as char } else { CP437_HIGH[(b - 0x80) as usize] })
            .collect(),
    }
}

fn fold(term: &str) -> Vec<char> {
    term.chars().flat_map(char::to_lowercase).collect()
}

/// End offset of a case-folded match of `needle` starting at `start`.
fn match_at(line: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, c) in line[start..].char_indices() {
        for folded in c.to_lowercase() {
            if needle.get(matched) != Some(&folded) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(start + offset + c.len_utf8());
        }
    }
    None
}

/// First match of a folded, non-empty `needle` in `line[from..]`, as byte
/// offsets into `line`.
fn find_folded(line: &str, needle: &[char], from: usize) -> Option<(usize, usize)> {
    line[from..].char_indices().find_map(|(i, _)| {
        let start = from + i;
        match_at(line, start, needle).map(|end| (start, end))
    })
}

/// Lines containing `term` (case-insensitive), with their 1-based numbers.
/// An empty term keeps every line.
pub fn filter_lines<'a>(content: &'a str, term: &str) -> Vec<(usize, &'a str)> {
    let needle = fold(term);
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| needle.is_empty() || find_folded(line, &needle, 0).is_some())
        .collect()
}

/// Splits `line` into `(text, is_match)` runs for highlighting, using the
/// same case folding as [`filter_lines`].
pub fn highlight_segments(line: &str, term: &str) -> Vec<(String, bool)> {
    let needle = fold(term);
    if needle.is_empty() {
        return vec![(line.to_string(), false)];
    }
    let mut segments = Vec::new();
    let mut pos = 0;
    while let Some((start, end)) = find_folded(line, &needle, pos) {
        if start > pos {
            segments.push((line[pos..start].to_string(), false));
        }
        segments.push((line[start..end].to_string(), true));
        pos = end;
    }
    if pos < line.len() || segments.is_empty() {
        segments.push((line[pos..].to_string(), false));
    }
    segments
}

#[component]
pub fn NfoViewer(
    #[prop(into)] content: Signal<String>,
    #[prop(optional)] line_numbers: bool,
    /// Width cap in characters.
    #[prop(default = 80)]
    max_width: u32,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let zoom = RwSignal::new(100u32);
    let toasts = use_context::<ToastBus>();

    let total_lines = move || content.with(|c| c.split('\n').count());

    let rendered_lines = move || {
        let term = search.get();
        content.with(|c| {
            filter_lines(c, &term)
                .into_iter()
                .map(|(number, line)| {
                    let segments = highlight_segments(line, &term)
                        .into_iter()
                        .map(|(text, hit)| {
                            if hit {
                                view! { <mark>{text}</mark> }.into_any()
                            } else {
                                text.into_any()
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="nfo-viewer__line">
                            {line_numbers.then(|| view! {
                                <span class="nfo-viewer__line-number">{number}</span>
                            })}
                            <span class="nfo-viewer__text">{segments}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let copy = move |_| {
        let toasts = toasts.clone();
        copy_to_clipboard(&content.get_untracked(), move |ok| {
            if let Some(toasts) = toasts {
                if ok {
                    toasts.info("Copied to clipboard");
                } else {
                    toasts.warning("Clipboard is not available");
                }
            }
        });
    };

    view! {
        <div class="nfo-viewer-container">
            <div class="nfo-viewer-toolbar">
                <div class="nfo-viewer-toolbar__group">
                    <input
                        type="text"
                        class="form-control form-control-sm"
                        placeholder="Search in content..."
                        aria-label="Search in NFO content"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button
                        class="btn-sm"
                        on:click=move |_| search.set(String::new())
                        disabled=move || search.with(|s| s.is_empty())
                        aria-label="Clear search"
                    >
                        "✕"
                    </button>
                </div>
                <div class="nfo-viewer-toolbar__group">
                    <button class="btn-sm" on:click=move |_| zoom.update(|z| *z = zoom_out(*z)) aria-label="Zoom out">
                        "−"
                    </button>
                    <span class="small">{move || format!("{}%", zoom.get())}</span>
                    <button class="btn-sm" on:click=move |_| zoom.update(|z| *z = zoom_in(*z)) aria-label="Zoom in">
                        "+"
                    </button>
                    <button class="btn-sm btn-outline-primary" on:click=copy aria-label="Copy content">
                        "Copy"
                    </button>
                </div>
            </div>

            <pre
                class="nfo-viewer"
                role="textbox"
                aria-readonly="true"
                aria-label="NFO Viewer"
                style=move || format!("max-width: {}ch; font-size: {}%;", max_width, zoom.get())
            >
                {rendered_lines}
            </pre>

            <Show when=move || search.with(|s| !s.is_empty())>
                <div class="nfo-viewer__summary small">
                    {move || {
                        let term = search.get();
                        let found = content.with(|c| filter_lines(c, &term).len());
                        format!("{} of {} line(s) match", found, total_lines())
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_is_clamped() {
        assert_eq!(zoom_in(100), 110);
        assert_eq!(zoom_in(195), 200);
        assert_eq!(zoom_in(200), 200);
        assert_eq!(zoom_out(100), 90);
        assert_eq!(zoom_out(50), 50);
        assert_eq!(zoom_out(55), 50);
    }

    #[test]
    fn test_filter_lines_case_insensitive() {
        let content = "[ RULES ]\nNo MP3\nmp3 allowed in AUDIOBOOK\nEnd";
        let hits = filter_lines(content, "Mp3");
        assert_eq!(hits, vec![(2, "No MP3"), (3, "mp3 allowed in AUDIOBOOK")]);
        assert_eq!(filter_lines(content, "").len(), 4);
        assert!(filter_lines(content, "flac").is_empty());
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight_segments("No MP3 or mp3", "mp3");
        assert_eq!(
            segments,
            vec![
                ("No ".to_string(), false),
                ("MP3".to_string(), true),
                (" or ".to_string(), false),
                ("mp3".to_string(), true),
            ]
        );
        assert_eq!(
            highlight_segments("plain", ""),
            vec![("plain".to_string(), false)]
        );
    }

    #[test]
    fn test_every_filtered_line_has_a_highlight() {
        let content = "RÈGLES\nCafé\nnothing";
        let hits = filter_lines(content, "è");
        assert_eq!(hits, vec![(1, "RÈGLES")]);
        for (_, line) in hits {
            assert!(highlight_segments(line, "è").iter().any(|(_, hit)| *hit));
        }
        assert_eq!(
            highlight_segments("CAFÉ café", "é"),
            vec![
                ("CAF".to_string(), false),
                ("É".to_string(), true),
                (" caf".to_string(), false),
                ("é".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_decode_nfo() {
        assert_eq!(decode_nfo("plain ✓".as_bytes()), "plain ✓");
        assert_eq!(decode_nfo(&[0xDB, 0xB2, b' ', b'A', 0x80]), "█▓ AÇ");
        assert_eq!(decode_nfo(&[0xFF]), "\u{a0}");
    }
}
