use chrono::prelude::*;
use gloo::timers::callback::Interval;
use litgrid_core::CLOCK_INTERVAL_MS;
use yew::prelude::*;

use crate::utils::utc_now;

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// The browser's current UTC offset.
pub fn local_offset() -> FixedOffset {
    // minutes to add to local time to get UTC, so positive means west
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

pub fn format_time(at: DateTime<FixedOffset>) -> String {
    at.format(TIME_FORMAT).to_string()
}

pub fn format_clock(at: DateTime<FixedOffset>) -> String {
    format!("{} | {}", at.format(TIME_FORMAT), at.format(DATE_FORMAT))
}

/// `HH:MM:SS` of a UTC instant as seen from `offset`.
pub fn format_local_time(at: DateTime<Utc>, offset: FixedOffset) -> String {
    format_time(at.with_timezone(&offset))
}

pub enum ClockMsg {
    Tick,
}

/// Wall clock, independent of the game.
pub struct ClockView {
    now: DateTime<Utc>,
    _timer_interval: Interval,
}

impl Component for ClockView {
    type Message = ClockMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            now: utc_now(),
            _timer_interval: Interval::new(CLOCK_INTERVAL_MS, move || {
                link.send_message(ClockMsg::Tick)
            }),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ClockMsg::Tick => {
                let now = utc_now();
                if now.timestamp() != self.now.timestamp() {
                    self.now = now;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let text = format_clock(self.now.with_timezone(&local_offset()));
        html! {
            <div class="clock">{text}</div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 7, 21, 5, 9).unwrap()
    }

    #[test]
    fn clock_shows_time_then_long_date() {
        let utc = instant().with_timezone(&Utc.fix());

        assert_eq!(format_clock(utc), "21:05:09 | October 7, 2026");
    }

    #[test]
    fn local_time_follows_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();

        assert_eq!(format_local_time(instant(), tokyo), "06:05:09");
        assert_eq!(format_local_time(instant(), new_york), "17:05:09");
    }

    #[test]
    fn date_rolls_over_with_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        assert_eq!(
            format_clock(instant().with_timezone(&tokyo)),
            "06:05:09 | October 8, 2026"
        );
    }
}
