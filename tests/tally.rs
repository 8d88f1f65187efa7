use gtally::git::parse_numstat;
use gtally::model::{repo_name, CommitRow, GlobalStats, LineRow, Repository};
use gtally::tally::{combined_score, Aggregator, NameNormalizer, SortKey};
use pretty_assertions::assert_eq;

fn commits(rows: &[(&str, u64)]) -> Vec<CommitRow> {
    rows.iter()
        .map(|(author, commits)| CommitRow {
            author: author.to_string(),
            commits: *commits,
        })
        .collect()
}

fn lines(rows: &[(&str, u64, u64)]) -> Vec<LineRow> {
    rows.iter()
        .map(|(author, added, deleted)| LineRow {
            author: author.to_string(),
            added: *added,
            deleted: *deleted,
        })
        .collect()
}

fn assert_lines_invariant(stats: &GlobalStats) {
    for c in stats.contributors.values() {
        assert_eq!(c.lines_changed, c.lines_added + c.lines_deleted, "{}", c.name);
    }
    for repo in &stats.repositories {
        for c in repo.contributors.values() {
            assert_eq!(c.lines_changed, c.lines_added + c.lines_deleted, "{}", c.name);
        }
    }
}

#[test]
fn normalize_collapses_name_variants() {
    let n = NameNormalizer::new();
    let variants = [
        "Martin Pražák",
        "martin.prazak",
        "MARTIN_PRAZAK",
        "  Martin   Prazak  ",
        "Martin.Prazak",
        "martin.pražák",
        "Martin-Prazak",
    ];
    for v in variants {
        assert_eq!(n.normalize(v), "martinprazak", "{v:?}");
    }
}

#[test]
fn normalize_handles_edge_inputs() {
    let n = NameNormalizer::new();
    assert_eq!(n.normalize(""), "");
    assert_eq!(n.normalize("   "), "");
    assert_eq!(n.normalize("..."), "");
    assert_eq!(n.normalize("User123"), "user123");
    assert_eq!(n.normalize("  Martin.Pražák_123  "), "martinprazak123");
}

#[test]
fn normalize_folds_common_latin_diacritics() {
    let n = NameNormalizer::new();
    assert_eq!(n.normalize("José María"), "josemaria");
    assert_eq!(n.normalize("Björn Müller"), "bjornmuller");
    assert_eq!(n.normalize("François Léon"), "francoisleon");
    assert_eq!(n.normalize("ŇOŘÍ Ůž"), "noriuz");
}

#[test]
fn normalize_keeps_unmapped_letters() {
    let n = NameNormalizer::new();
    assert_eq!(n.normalize("Дмитрий Иванов"), "дмитрийиванов");
    assert_eq!(n.normalize("山田 太郎"), "山田太郎");
}

#[test]
fn normalize_drops_combining_marks() {
    let n = NameNormalizer::new();
    assert_eq!(n.normalize("हिन्दी"), "हनद");
    assert_eq!(n.normalize("हिन्दी"), n.normalize("हनद"));
    assert_eq!(n.normalize("Jose\u{301}"), "jose");
}

#[test]
fn aggregate_sums_repeated_line_rows() {
    let agg = Aggregator::with_normalization(false);
    let repo = agg.aggregate(
        "/work/app",
        &commits(&[("Alice", 3)]),
        &lines(&[("Alice", 10, 2), ("Alice", 5, 0), ("Alice", 0, 7)]),
    );

    let alice = &repo.contributors["Alice"];
    assert_eq!(alice.commit_count, 3);
    assert_eq!(alice.lines_added, 15);
    assert_eq!(alice.lines_deleted, 9);
    assert_eq!(alice.lines_changed, 24);
    assert_eq!(repo.name, "app");
}

#[test]
fn aggregate_sums_duplicate_commit_rows() {
    let agg = Aggregator::with_normalization(false);
    let repo = agg.aggregate("/r", &commits(&[("Bob", 2), ("Bob", 3)]), &[]);
    assert_eq!(repo.contributors["Bob"].commit_count, 5);
}

#[test]
fn aggregate_without_normalization_keeps_variants_apart() {
    let agg = Aggregator::with_normalization(false);
    let repo = agg.aggregate(
        "/r",
        &commits(&[("Martin Pražák", 4), ("martin.prazak", 1)]),
        &[],
    );
    assert_eq!(repo.contributors.len(), 2);
    assert!(repo.contributors.values().all(|c| c.aliases.is_empty()));
}

#[test]
fn aggregate_with_normalization_merges_variants_and_records_aliases() {
    let agg = Aggregator::with_normalization(true);
    let repo = agg.aggregate(
        "/r",
        &commits(&[("Martin Pražák", 4), ("martin.prazak", 1)]),
        &lines(&[
            ("Martin_Prazak", 3, 1),
            ("martin.prazak", 2, 2),
            ("Martin Pražák", 1, 0),
        ]),
    );

    assert_eq!(repo.contributors.len(), 1);
    let martin = &repo.contributors["martinprazak"];
    assert_eq!(martin.name, "Martin Pražák");
    assert_eq!(martin.commit_count, 5);
    assert_eq!(martin.lines_changed, 9);
    assert_eq!(martin.aliases, vec!["martin.prazak", "Martin_Prazak"]);
}

#[test]
fn aggregate_of_no_rows_is_an_empty_repository() {
    let agg = Aggregator::with_normalization(true);
    let repo = agg.aggregate("/r/empty", &[], &[]);
    assert!(repo.contributors.is_empty());

    let mut stats = GlobalStats::new();
    stats.add_repository(repo);
    assert!(stats.contributors.is_empty());
    assert_eq!(stats.repositories.len(), 1);
}

fn sample_repos(agg: &Aggregator) -> Vec<Repository> {
    vec![
        agg.aggregate(
            "/w/one",
            &commits(&[("Alice", 10), ("Bob", 1)]),
            &lines(&[("Alice", 100, 20), ("Bob", 5, 5)]),
        ),
        agg.aggregate(
            "/w/two",
            &commits(&[("Bob", 4), ("Carol", 2)]),
            &lines(&[("Bob", 40, 0), ("Carol", 1, 1)]),
        ),
        agg.aggregate(
            "/w/three",
            &commits(&[("Alice", 1), ("Carol", 7)]),
            &lines(&[("Carol", 300, 0)]),
        ),
    ]
}

#[test]
fn merge_sums_counts_across_repositories() {
    let agg = Aggregator::with_normalization(false);
    let stats = GlobalStats::from_repositories(sample_repos(&agg));

    assert_eq!(stats.contributors["Alice"].commit_count, 11);
    assert_eq!(stats.contributors["Bob"].commit_count, 5);
    assert_eq!(stats.contributors["Carol"].commit_count, 9);
    assert_eq!(stats.contributors["Carol"].lines_changed, 302);
    assert_lines_invariant(&stats);

    let names: Vec<&str> = stats.repositories.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
}

#[test]
fn merge_totals_do_not_depend_on_order() {
    let agg = Aggregator::with_normalization(false);
    let forward = GlobalStats::from_repositories(sample_repos(&agg));
    let mut reversed_repos = sample_repos(&agg);
    reversed_repos.reverse();
    let reversed = GlobalStats::from_repositories(reversed_repos);

    for (key, c) in &forward.contributors {
        let other = &reversed.contributors[key];
        assert_eq!(c.commit_count, other.commit_count);
        assert_eq!(c.lines_added, other.lines_added);
        assert_eq!(c.lines_deleted, other.lines_deleted);
        assert_eq!(c.lines_changed, other.lines_changed);
    }
}

#[test]
fn merge_keeps_first_display_name_and_collects_aliases() {
    let agg = Aggregator::with_normalization(true);
    let first = agg.aggregate("/w/a", &commits(&[("Martin Pražák", 2)]), &[]);
    let second = agg.aggregate(
        "/w/b",
        &commits(&[("martin.prazak", 3), ("MARTIN_PRAZAK", 1)]),
        &[],
    );
    let third = agg.aggregate("/w/c", &commits(&[("martin.prazak", 1)]), &[]);

    let stats = GlobalStats::from_repositories([first, second, third]);
    let martin = &stats.contributors["martinprazak"];
    assert_eq!(martin.name, "Martin Pražák");
    assert_eq!(martin.commit_count, 7);
    assert_eq!(martin.aliases, vec!["martin.prazak", "MARTIN_PRAZAK"]);
    assert!(!martin.aliases.contains(&martin.name));
}

#[test]
fn merge_copies_records_instead_of_sharing_them() {
    let agg = Aggregator::with_normalization(true);
    let mut stats = GlobalStats::new();
    stats.add_repository(agg.aggregate("/w/a", &commits(&[("Ann Lee", 1), ("ann.lee", 1)]), &[]));
    stats.add_repository(agg.aggregate("/w/b", &commits(&[("ANN LEE", 1)]), &[]));

    assert_eq!(stats.contributors["annlee"].aliases, vec!["ann.lee", "ANN LEE"]);
    assert_eq!(stats.repositories[0].contributors["annlee"].aliases, vec!["ann.lee"]);
    assert_eq!(stats.repositories[0].contributors["annlee"].commit_count, 2);
}

fn ranking_table() -> GlobalStats {
    let agg = Aggregator::with_normalization(false);
    GlobalStats::from_repositories([agg.aggregate(
        "/w/r",
        &commits(&[("Alice", 15), ("Bob", 5), ("Carol", 1)]),
        &lines(&[("Alice", 50, 50), ("Bob", 150, 50), ("Carol", 5000, 0)]),
    )])
}

fn names(list: &[&gtally::model::ContributorStats]) -> Vec<String> {
    list.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn rank_by_commits_puts_most_commits_first() {
    let stats = ranking_table();
    assert_eq!(names(&stats.ranked(SortKey::Commits, 0)), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn rank_by_lines_puts_most_changed_lines_first() {
    let stats = ranking_table();
    assert_eq!(names(&stats.ranked(SortKey::Lines, 0)), vec!["Carol", "Bob", "Alice"]);
}

#[test]
fn rank_combined_weights_commits_over_lines() {
    // Alice 150+1, Bob 50+2, Carol 10+50
    let stats = ranking_table();
    assert_eq!(names(&stats.ranked(SortKey::Combined, 0)), vec!["Alice", "Carol", "Bob"]);
}

#[test]
fn unknown_sort_key_falls_back_to_commits() {
    let stats = ranking_table();
    assert_eq!(SortKey::from("bogus"), SortKey::Commits);
    assert_eq!(
        names(&stats.ranked(SortKey::from("bogus"), 0)),
        names(&stats.ranked(SortKey::Commits, 0))
    );
}

#[test]
fn limit_truncates_after_sorting() {
    let stats = ranking_table();
    assert_eq!(names(&stats.ranked(SortKey::Commits, 2)), vec!["Alice", "Bob"]);
    assert_eq!(stats.ranked(SortKey::Commits, 0).len(), 3);
    assert_eq!(stats.ranked(SortKey::Commits, 10).len(), 3);
}

#[test]
fn ties_are_broken_by_canonical_key() {
    let agg = Aggregator::with_normalization(false);
    let stats = GlobalStats::from_repositories([agg.aggregate(
        "/w/r",
        &commits(&[("Zed", 3), ("Amy", 3), ("Max", 3)]),
        &[],
    )]);
    assert_eq!(names(&stats.ranked(SortKey::Commits, 0)), vec!["Amy", "Max", "Zed"]);
}

#[test]
fn huge_counts_saturate_instead_of_wrapping() {
    let rows = parse_numstat("Alice\n18446744073709551615\t1\tf\n5\t0\tg\n");
    let agg = Aggregator::with_normalization(false);
    let repo = agg.aggregate("/w/a", &commits(&[("Alice", u64::MAX)]), &rows);
    let alice = &repo.contributors["Alice"];
    assert_eq!(alice.lines_added, u64::MAX);
    assert_eq!(alice.lines_deleted, 1);
    assert_eq!(alice.lines_changed, u64::MAX);

    let again = agg.aggregate("/w/b", &commits(&[("Alice", 2)]), &[]);
    let stats = GlobalStats::from_repositories([repo, again]);
    let alice = &stats.contributors["Alice"];
    assert_eq!(alice.commit_count, u64::MAX);
    assert_eq!(combined_score(alice), u64::MAX);
    assert_eq!(stats.ranked(SortKey::Combined, 0).len(), 1);
}

#[test]
fn repo_name_uses_last_path_segment() {
    assert_eq!(repo_name("/path/to/my-repo"), "my-repo");
    assert_eq!(repo_name("C:\\src\\tool"), "tool");
    assert_eq!(repo_name("bare"), "bare");
    assert_eq!(repo_name(""), "unknown");
    assert_eq!(repo_name("path/"), "");
}
