use sbar_core::StatusBarContainerView;
use unicode_width::UnicodeWidthChar;

/// Compose one bar line of exactly `width` cells.
///
/// Each visible container's text is placed at its rounded `desired_origin`
/// and clipped or padded to its rounded `desired_width`.  Containers that
/// would start left of the cursor (overlapping hints) are placed at the
/// cursor instead.
pub fn compose_line(width: usize, containers: &[StatusBarContainerView], visible: &[usize]) -> String {
    let mut order: Vec<&StatusBarContainerView> = visible.iter().map(|&i| &containers[i]).collect();
    order.sort_by(|a, b| a.desired_origin().total_cmp(&b.desired_origin()));

    let mut line = String::with_capacity(width);
    let mut cursor = 0usize;

    for container in order {
        let origin = cells(container.desired_origin()).max(cursor);
        if origin >= width {
            break;
        }
        pad(&mut line, origin - cursor);
        cursor = origin;

        let slot = cells(container.desired_width()).min(width - cursor);
        let used = push_clipped(&mut line, &container.component().render(), slot);
        pad(&mut line, slot - used);
        cursor += slot;
    }

    pad(&mut line, width.saturating_sub(cursor));
    line
}

/// Round a screen-space hint to whole cells; negative values clamp to zero.
fn cells(value: f64) -> usize {
    value.round().max(0.0) as usize
}

fn pad(line: &mut String, n: usize) {
    line.extend(std::iter::repeat(' ').take(n));
}

/// Append as much of `text` as fits in `limit` cells; returns cells used.
///
/// Control characters are dropped so a frame is always exactly one line.
fn push_clipped(line: &mut String, text: &str, limit: usize) -> usize {
    let mut used = 0;
    for ch in text.chars().filter(|ch| !ch.is_control()) {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        line.push(ch);
        used += w;
    }
    used
}
