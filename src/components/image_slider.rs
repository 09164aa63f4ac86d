//! Image Slider Component
//!
//! One image at a time with wrap-around previous/next arrows.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Index after stepping `delta` slides, wrapping at both ends.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + delta).rem_euclid(len)) as usize
}

#[component]
pub fn ImageSlider(#[prop(into)] images: Signal<Vec<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let (index, set_index) = signal(0usize);

    // New image set, back to the first slide
    Effect::new(move |_| {
        images.track();
        set_index.set(0);
    });

    let step = move |delta: isize| {
        let len = images.with_untracked(Vec::len);
        set_index.update(|i| *i = wrap_index(*i, delta, len));
    };

    view! {
        <div class="image-slider">
            {move || {
                let current = images.with(|list| list.get(index.get()).cloned());
                match current {
                    Some(src) => view! { <img class="slide" src=ctx.image_url(&src) alt="" /> }.into_any(),
                    None => view! { <div class="slide placeholder">"No image"</div> }.into_any(),
                }
            }}
            <Show when=move || images.with(|list| list.len() > 1)>
                <button type="button" class="slide-nav prev" on:click=move |_| step(-1)>"‹"</button>
                <button type="button" class="slide-nav next" on:click=move |_| step(1)>"›"</button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 1, 0), 0);
    }
}
