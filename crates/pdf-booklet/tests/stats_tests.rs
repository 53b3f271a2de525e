use pdf_booklet::*;

#[test]
fn test_stats_no_pages() {
    let stats = statistics_for_pages(0);

    assert_eq!(stats.source_pages, 0);
    assert_eq!(stats.padded_pages, 0);
    assert_eq!(stats.sheets, 0);
    assert_eq!(stats.blank_halves, 0);
}

#[test]
fn test_stats_multiple_of_four() {
    let stats = statistics_for_pages(8);

    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.padded_pages, 8);
    // 8 pages / 2 per sheet = 4 sheets
    assert_eq!(stats.sheets, 4);
    assert_eq!(stats.averse_sheets, 2);
    assert_eq!(stats.reverse_sheets, 2);
    assert_eq!(stats.blank_halves, 0);
}

#[test]
fn test_stats_five_pages() {
    let stats = statistics_for_pages(5);

    // 5 pages padded to 6 = 3 sheets, one half left blank
    assert_eq!(stats.padded_pages, 6);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.reverse_sheets, 2);
    assert_eq!(stats.averse_sheets, 1);
    assert_eq!(stats.blank_halves, 1);
}

#[test]
fn test_stats_seven_pages() {
    let stats = statistics_for_pages(7);

    // 7 pages padded to 10 = 5 sheets, 3 halves blank
    assert_eq!(stats.padded_pages, 10);
    assert_eq!(stats.sheets, 5);
    assert_eq!(stats.blank_halves, 3);
}

#[test]
fn test_stats_match_plan() {
    for n in 0..50 {
        let plan = plan(n);
        let stats = calculate_statistics(&plan);

        assert_eq!(stats.sheets, plan.len());
        assert_eq!(stats.sheets * 2 - stats.blank_halves, n);
        assert_eq!(stats.averse_sheets + stats.reverse_sheets, stats.sheets);
    }
}
