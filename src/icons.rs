use iced::widget::svg::{self, Svg};

const STAR_FILLED: &[u8] = include_bytes!("../assets/icons/star.svg");
const STAR_OUTLINE: &[u8] = include_bytes!("../assets/icons/star-outline.svg");
const HEART: &[u8] = include_bytes!("../assets/icons/heart.svg");
const HEART_ACTIVE: &[u8] = include_bytes!("../assets/icons/heart-active.svg");

fn icon<'a>(bytes: &'static [u8]) -> Svg<'a> {
    Svg::new(svg::Handle::from_memory(bytes)).width(20).height(20)
}

pub fn star_filled<'a>() -> Svg<'a> {
    icon(STAR_FILLED)
}

pub fn star_outline<'a>() -> Svg<'a> {
    icon(STAR_OUTLINE)
}

pub fn heart<'a>() -> Svg<'a> {
    icon(HEART)
}

pub fn heart_active<'a>() -> Svg<'a> {
    icon(HEART_ACTIVE)
}
