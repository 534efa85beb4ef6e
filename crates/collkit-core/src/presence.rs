pub fn is_absent<T>(value: &Option<T>) -> bool {
    value.is_none()
}

pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

pub fn is_non_empty_text(text: Option<&str>) -> bool {
    text.is_some_and(|s| !s.is_empty())
}
