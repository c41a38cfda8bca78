use web_sys::HtmlElement;
use yew::prelude::*;

use super::dom::MotionHandle;
use super::orchestrator::MotionOptions;

/// Mounts an orchestrator over `root` after the first render and disposes it
/// when the component unmounts.
#[hook]
pub fn use_motion(root: NodeRef, options: MotionOptions) {
    use_effect_with_deps(
        move |_| {
            let handle = root
                .cast::<HtmlElement>()
                .and_then(|element| MotionHandle::mount(element, options));
            if handle.is_none() {
                log::debug!("motion: nothing to mount");
            }
            move || drop(handle)
        },
        (),
    );
}
