use cardstats::{
    AnalysisConfig, DrawLabel, Report, Section, Variant, analyze, format_percent,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Test fixtures

const RU_COPY_SPELL: &str = r#"
Creatures:
    4x Lighting Stormkin RU
        Flying, Haste
        2/2

Planeswalkers:

Instants:
    2x Hypothesizzle 3UR
        Draw two cards. You may discard a card to deal 4 dmg to target creature
    3x Ral's Outburst 2UR
        Deal 3 dmg to any target. Draw two cards, discard one

Sorceries:
    2x Shock R

Enchantments:
    4x Quicksilver Dagger 1UR
        Enchanted creature has "{T}: This creature deals 1 dmg to target player.
    2x Magefire Wings UR
        Enchanted creature gets +2/+0 and has flying

Artifacts:
Equipment:
Lands:
    /* 10x Plains */
    10x Island
    # 4x Scrylands
    10x Mountain
"#;

fn report_text(text: &str, config: AnalysisConfig) -> String {
    let analysis = analyze(text, config);
    Report::new(&analysis, &mut StdRng::seed_from_u64(0)).render_text()
}

#[test]
fn legacy_variant_matches_classic_output() {
    let expected = "\
Creatures
\t4x Lighting Stormkin RU
Planeswalkers
Instants
\t2x Hypothesizzle 3UR
\t3x Ral's Outburst 2UR
\t2x Shock R
Enchantments
\t4x Quicksilver Dagger 1UR
\t2x Magefire Wings UR
Artifacts
Equipment
Lands
\t10x Island
\t10x Mountain
---
37 cards (23 more cards to get to 60)
\t4 Creatures (11%)
\t7 Instants (19%)
\t6 Enchantments (16%)
\t20 Lands (54%)
";
    assert_eq!(report_text(RU_COPY_SPELL, Variant::Legacy.config()), expected);
}

#[test]
fn full_variant_counts_sorceries_separately() {
    let analysis = analyze(RU_COPY_SPELL, Variant::Full.config());
    let sections: Vec<(Section, u64)> = analysis.tally.sections.iter().collect();
    assert_eq!(
        sections,
        vec![
            (Section::Creatures, 4),
            (Section::Instants, 5),
            (Section::Sorceries, 2),
            (Section::Enchantments, 6),
            (Section::Lands, 20),
        ]
    );
}

#[test]
fn totals_agree_across_structures() {
    for variant in [Variant::Legacy, Variant::Curve, Variant::Full] {
        let analysis = analyze(RU_COPY_SPELL, variant.config());
        let by_section: u64 = analysis.tally.sections.iter().map(|(_, n)| n).sum();
        assert_eq!(by_section, analysis.tally.total());
        assert_eq!(analysis.tally.pool.len(), analysis.tally.total());
    }
}

#[test]
fn percentages_sum_close_to_100() {
    let analysis = analyze(RU_COPY_SPELL, Variant::Full.config());
    let total = analysis.tally.total();
    let sections: Vec<(Section, u64)> = analysis.tally.sections.iter().collect();
    let rounded: i64 = sections
        .iter()
        .map(|(_, n)| {
            format_percent(100.0 * *n as f64 / total as f64)
                .trim_end_matches('%')
                .parse::<i64>()
                .unwrap()
        })
        .sum();
    let slack = sections.len() as i64 - 1;
    assert!((rounded - 100).abs() <= slack, "sum was {rounded}");
}

#[test]
fn mana_curve_counts_distinct_entries() {
    let analysis = analyze(RU_COPY_SPELL, Variant::Full.config());
    let cmc = &analysis.tally.cmc;
    // Island and Mountain fall back to their whole name as the cost token.
    assert_eq!(cmc.get(1), 1);
    assert_eq!(cmc.get(2), 2);
    assert_eq!(cmc.get(3), 1);
    assert_eq!(cmc.get(4), 1);
    assert_eq!(cmc.get(5), 1);
    assert_eq!(cmc.get(6), 1);
    assert_eq!(cmc.get(8), 1);
    assert_eq!(cmc.max_cmc(), Some(8));
}

#[test]
fn lands_scenario() {
    let text = report_text("Lands:\n    10x Plains\n    10x Island\n", Variant::Legacy.config());
    assert!(text.contains("20 cards (40 more cards to get to 60)"));
    assert!(text.contains("\t20 Lands (100%)"));
}

#[test]
fn commented_entry_is_ignored() {
    let analysis = analyze("Lands:\n# 4x Scrylands\n", Variant::Full.config());
    assert_eq!(analysis.tally.total(), 0);
    assert!(analysis.tally.cmc.is_empty());
    let text = Report::new(&analysis, &mut StdRng::seed_from_u64(0)).render_text();
    assert!(!text.contains("Scrylands"));
}

#[test]
fn empty_input_guards_division() {
    let text = report_text("# just a comment\n\n", Variant::Legacy.config());
    assert_eq!(text, "---\n0 cards (60 more cards to get to 60)\n");
}

#[test]
fn output_without_sampling_is_stable() {
    let config = AnalysisConfig {
        render_sample_hand: false,
        ..Variant::Full.config()
    };
    let first = report_text(RU_COPY_SPELL, config);
    let analysis = analyze(RU_COPY_SPELL, config);
    let second = Report::new(&analysis, &mut StdRng::seed_from_u64(99)).render_text();
    assert_eq!(first, second);
}

#[test]
fn sample_hand_shape() {
    let analysis = analyze(RU_COPY_SPELL, Variant::Full.config());
    let report = Report::new(&analysis, &mut StdRng::seed_from_u64(2024));
    let sample = report.sample();

    assert_eq!(sample.len(), 18);
    assert!(sample[..7].iter().all(|d| d.label == DrawLabel::Hand));
    for (i, draw) in sample[7..].iter().enumerate() {
        assert_eq!(draw.label, DrawLabel::Turn(i + 1));
    }
    assert_eq!(analysis.tally.pool.len(), 37);
}

#[test]
fn huge_counts_are_totalled() {
    let analysis = analyze("Lands:\n5000000x Island\n", Variant::Legacy.config());
    assert_eq!(analysis.tally.total(), 5_000_000);
    assert_eq!(analysis.tally.pool.runs().len(), 1);

    let text = report_text("Lands:\n99999999999x Island\n4x Mountain\n", Variant::Full.config());
    assert!(text.contains("\t99999999999x Island"));
    assert!(text.contains("100000000003 cards\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("H: ")).count(), 7);
}
