use std::fmt::Write;

use rgsweep_core::ResourceGroup;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Print the listing as a box-drawn table.
pub fn print_groups_table(groups: &[ResourceGroup]) {
    print!("{}", render_groups_table(groups));
}

/// Print the listing as one block of `Field : value` lines per group.
pub fn print_groups_list(groups: &[ResourceGroup]) {
    print!("{}", render_groups_list(groups));
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(min).clamp(min, max)
}

pub fn render_groups_table(groups: &[ResourceGroup]) -> String {
    let tags: Vec<String> = groups.iter().map(ResourceGroup::tags_display).collect();

    let name_width = column_width(groups.iter().map(|g| g.name.as_str()), 4, 40);
    let location_width = column_width(groups.iter().map(|g| g.location.as_str()), 8, 20);
    let state_width = column_width(groups.iter().map(|g| g.provisioning_state()), 5, 12);
    let tags_width = column_width(tags.iter().map(String::as_str), 4, 50);
    let widths = [name_width, location_width, state_width, tags_width];

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let row = |cells: [&str; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| truncate(cell, width))
            .collect();
        format!("│ {} │\n", padded.join(" │ "))
    };

    let mut out = String::new();
    out.push_str(&rule("┌", "┬", "┐"));
    out.push_str(&row(["Name", "Location", "State", "Tags"]));
    out.push_str(&rule("├", "┼", "┤"));
    for (group, tags) in groups.iter().zip(&tags) {
        out.push_str(&row([
            group.name.as_str(),
            group.location.as_str(),
            group.provisioning_state(),
            tags.as_str(),
        ]));
    }
    out.push_str(&rule("└", "┴", "┘"));
    let _ = writeln!(out, "\nTotal: {} resource group(s)", groups.len());
    out
}

pub fn render_groups_list(groups: &[ResourceGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "Name              : {}", group.name);
        let _ = writeln!(out, "Location          : {}", group.location);
        let _ = writeln!(out, "ProvisioningState : {}", group.provisioning_state());
        let _ = writeln!(out, "Tags              : {}", group.tags_display());
        if let Some(managed_by) = &group.managed_by {
            let _ = writeln!(out, "ManagedBy         : {}", managed_by);
        }
        let _ = writeln!(out, "ResourceId        : {}", group.id);
        out.push('\n');
    }
    out
}

/// Truncate a string to a display width, adding "..." if truncated, and pad
/// it to exactly that width.
///
/// Measures terminal columns rather than bytes, so wide characters such as
/// emoji are never split.
pub fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        return format!("{}{}", s, " ".repeat(max_width - width));
    }

    let budget = max_width.saturating_sub(3);
    let mut kept = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        kept.push(ch);
        used += w;
    }
    kept.push_str("...");
    used += 3;

    format!("{}{}", kept, " ".repeat(max_width.saturating_sub(used)))
}
