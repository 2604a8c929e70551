//! Recovery boundary wrapped around widgets at composition time.
//!
//! # Design
//! - Descendants report failures through the [`ErrorReporter`] context.
//! - A reported error is logged and replaces the children with a fallback; it
//!   never propagates past the boundary.

use crate::core::errors::UiError;
use gloo::console;
use yew::prelude::*;

/// Context handle for reporting errors to the nearest boundary.
#[derive(Clone, PartialEq)]
pub(crate) struct ErrorReporter(Callback<UiError>);

impl ErrorReporter {
    pub(crate) fn report(&self, error: UiError) {
        self.0.emit(error);
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBoundaryProps {
    /// Name used in log lines.
    pub(crate) scope: AttrValue,
    /// Text shown in place of the children after a failure.
    pub(crate) fallback: AttrValue,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(ErrorBoundary)]
pub(crate) fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let failure = use_state(|| None as Option<UiError>);
    let reporter = {
        let failure = failure.clone();
        let scope = props.scope.clone();
        use_memo(
            move |_| {
                ErrorReporter(Callback::from(move |error: UiError| {
                    console::error!("ui error", scope.to_string(), error.to_string());
                    failure.set(Some(error));
                }))
            },
            (),
        )
    };

    if failure.is_some() {
        return html! {
            <div class="dash-graph-context dash-graph-context--error" role="alert">
                {props.fallback.clone()}
            </div>
        };
    }

    html! {
        <ContextProvider<ErrorReporter> context={(*reporter).clone()}>
            {for props.children.iter()}
        </ContextProvider<ErrorReporter>>
    }
}
