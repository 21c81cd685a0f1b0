use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

/// Keyed transition whose goal is picked by the first matching branch.
///
/// ```ignore
/// conditional_transition!(id, window, cx, Duration::from_millis(250), {
///     is_focus => focus_color,
///     is_hover => hover_color,
///     _ => color
/// })
/// ```
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let value = $crate::conditional_transition_branches!(@condition [ $($rest)+ ]);

        let transition = $window
            .use_keyed_transition($id, $cx, $duration, |_window, _cx| value)
            .with_easing(gpui::ease_out_quint());

        let value = value.into();

        if transition.read_goal($cx) != &value {
            transition.update($cx, |this, _cx| *this = value);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[macro_export]
macro_rules! conditional_transition_branches {
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` is only allowed on the last branch.");
    }};

    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ _ => $value:expr ]) => {{
        $value
    }};

    (@branch_list [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};

    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

/// Goes from 0 to 1 while `is_active` holds, and back when it stops.
///
/// Drives tab underlines and the skill bars growing in once the chart mounts.
pub fn active_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    is_active: bool,
) -> Transition<f32> {
    let goal = is_active as u8 as f32;

    let transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:active"),
            cx,
            duration,
            |_window, _cx| 0.,
        )
        .with_easing(ease_out_quint());

    transition.update(cx, |this, cx| {
        if *this != goal {
            *this = goal;
            cx.notify();
        }
    });

    transition
}
