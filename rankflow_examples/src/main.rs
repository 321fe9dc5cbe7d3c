// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for the rankflow layout crates.
//!
//! Builds a synthetic pair of rankings, brushes a rank interval, and
//! prints the resulting rank-mapping and distribution layouts.

use kurbo::Rect;
use rankflow_charts::{
    GroupDistributionSpec, RankMappingLayout, RankMappingSpec, compute_group_distribution,
    compute_rank_mapping,
};
use rankflow_core::{BaseDataset, BaseRecord, Brush, RankEntry, TargetDataset};
use rankflow_transforms::{GroupKeyBuilder, Side};

const ENTITY_COUNT: u32 = 26;

/// Base ranks 1..=26 with linearly falling scores; target ranks are the
/// base ranks permuted by `rank * 7 mod 26` (7 is coprime with 26).
fn synthetic_rankings() -> (BaseDataset, TargetDataset) {
    let tiers = ["gold", "silver", "bronze"];
    let regions = ["east", "west"];

    let mut base = BaseDataset::new();
    let mut target = TargetDataset::new();
    for i in 0..ENTITY_COUNT {
        let id = format!("n{i:02}");
        let base_rank = i + 1;
        let target_rank = (base_rank * 7) % ENTITY_COUNT + 1;
        base.insert(
            id.clone(),
            BaseRecord::new(RankEntry::new(base_rank, 1.0 - f64::from(base_rank) * 0.035))
                .with_attribute("tier", tiers[(i % 3) as usize])
                .with_attribute("region", regions[(i % 2) as usize]),
        );
        target.insert(id, RankEntry::new(target_rank, 1.0 - f64::from(target_rank) * 0.03));
    }
    (base, target)
}

fn main() {
    let (base, target) = synthetic_rankings();

    // Brush the entities whose target rank lands in [5, 16].
    let brush: Brush = target
        .ids_by_rank()
        .into_iter()
        .filter(|id| {
            target
                .rank_entry(id)
                .is_some_and(|entry| (5..=16).contains(&entry.rank))
        })
        .collect();
    println!("brushed {} of {ENTITY_COUNT} entities", brush.len());

    let group_by = GroupKeyBuilder::new(["tier", "region"]);
    let spec = RankMappingSpec::new(5, group_by.clone());
    let layout = compute_rank_mapping(&base, &target, &brush, &spec)
        .unwrap()
        .expect("brush is non-empty");
    print_rank_mapping(&layout);

    let top_group = layout.legend[0].group.clone();
    let dist_spec = GroupDistributionSpec::new(top_group.clone(), group_by);
    let dist = compute_group_distribution(&base, &target, &brush, &dist_spec)
        .unwrap()
        .expect("brush is non-empty");
    let base_bars = dist.bars.iter().filter(|b| b.side == Side::Base).count();
    let target_bars = dist.bars.iter().filter(|b| b.side == Side::Target).count();
    println!(
        "\ndistribution of \"{top_group}\" over ranks {}..={}: {base_bars} base bars above the \
         baseline, {target_bars} target bars below",
        dist.window.start, dist.window.end
    );
}

fn print_rank_mapping(layout: &RankMappingLayout) {
    let (first, last) = layout.rank_labels();
    println!("rank window: {first}..={last}");

    for (name, side) in [("base", &layout.base), ("target", &layout.target)] {
        println!(
            "{name} side: {} item marks, {} summary rows",
            side.items.len(),
            side.rows.len()
        );
        for row in &side.rows {
            let breakdown: Vec<String> = row
                .segments
                .iter()
                .map(|mark| {
                    format!(
                        "{} {:.0}%",
                        mark.segment.group,
                        mark.segment.width_fraction() * 100.0
                    )
                })
                .collect();
            println!(
                "  bin {} {}: {}",
                row.bin,
                fmt_rect(row.rect),
                breakdown.join(", ")
            );
        }
        for funnel in &side.funnels {
            let span = funnel.stations[1];
            println!(
                "  funnel for bin {} spans y {:.0}..{:.0}",
                funnel.bin, span.top, span.bottom
            );
        }
    }

    println!("{} item links:", layout.links.len());
    for link in layout.links.iter().take(5) {
        println!(
            "  {} ({:.0},{:.0}) -> ({:.0},{:.0})",
            link.entity, link.from.x, link.from.y, link.to.x, link.to.y
        );
    }
    if layout.links.len() > 5 {
        println!("  ...");
    }

    println!("legend:");
    for row in &layout.legend {
        println!("  {} x{}", row.group, row.count);
    }
}

fn fmt_rect(rect: Rect) -> String {
    format!(
        "{:.0}x{:.0} at ({:.0},{:.0})",
        rect.width(),
        rect.height(),
        rect.x0,
        rect.y0
    )
}
