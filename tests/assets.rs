const GALLERY_JS: &str = include_str!("../assets/js/gallery.js");
const INDEX_HTML: &str = include_str!("../templates/main/index.html");

#[test]
fn exhausted_load_more_clears_search_input() {
    assert!(INDEX_HTML.contains(r#"name="searchQuery""#));
    assert!(GALLERY_JS.contains("searchForm.elements.searchQuery.value = ''"));
    assert!(!GALLERY_JS.contains("searchForm.reset()"));
}

#[test]
fn load_more_reads_the_session_from_the_button() {
    assert!(INDEX_HTML.contains("data-query="));
    assert!(INDEX_HTML.contains("data-next-page="));
    assert!(GALLERY_JS.contains("btnLoadMore.dataset.nextPage"));
}
