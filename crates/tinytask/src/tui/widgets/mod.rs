pub(super) mod edit_popup;
pub(super) mod header;
pub(super) mod input_bar;
pub(super) mod status_bar;
pub(super) mod task_list;
pub(super) mod util;

#[cfg(test)]
pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> std::borrow::Cow<'_, str> {
    util::truncate_with_ellipsis(input, max_graphemes)
}
