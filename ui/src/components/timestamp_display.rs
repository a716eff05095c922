use jiff::Timestamp;
use yew::prelude::*;

use crate::utils::{format_local_date, time_since_now};

#[derive(Properties, PartialEq)]
pub struct TimestampDisplayProps {
    pub timestamp: Timestamp,
}

/// Relative time ("3 hours ago") with the calendar date as a tooltip.
#[function_component]
pub fn TimestampDisplay(props: &TimestampDisplayProps) -> Html {
    html! {
        <span title={format_local_date(props.timestamp)}>
            {time_since_now(props.timestamp)}
        </span>
    }
}
