use chrono::prelude::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use litgrid_core as game;
use game::{GameError, GameMachine, Mode, Phase, RandomCellPicker, Schedule, SessionToken};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::clock::{ClockView, format_local_time, local_offset};
use crate::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SelectMode(Mode),
    EditName(String),
    Start,
    RevealTick(SessionToken),
    CompletionElapsed(SessionToken),
}

#[derive(Properties, Clone, PartialEq)]
struct GridProps {
    side: usize,
    #[prop_or_default]
    cells: Option<game::Grid>,
}

#[function_component(GridView)]
fn grid_component(props: &GridProps) -> Html {
    let GridProps { side, cells } = props;
    let style = format!(
        "grid-template-columns: repeat({side}, 1fr); grid-template-rows: repeat({side}, 1fr);"
    );

    html! {
        <div class="board" {style}>
            {
                for cells.iter().flat_map(|grid| grid.iter()).map(|revealed| html! {
                    <div class={classes!("cell", revealed.then_some("lit"))}/>
                })
            }
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the reveal order instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Seed for the reveal order of one session.
fn session_seed(forced: Option<u64>, token: SessionToken) -> u64 {
    match forced {
        Some(seed) => seed.wrapping_add(token.get().into()),
        None => js_random_seed(),
    }
}

/// Text of the side panel: what is being played, or how the last game ended.
fn info_lines(machine: &GameMachine, now: DateTime<Utc>, offset: FixedOffset) -> Vec<String> {
    let Some(session) = machine.session() else {
        return Vec::new();
    };

    match (machine.phase(), session.ended_at) {
        (Phase::Running | Phase::Completing, _) => vec![
            format!(
                "Game started at: {}",
                format_local_time(session.started_at, offset)
            ),
            format!("Player: {}", session.player_name),
            format!("Mode: {}", session.mode),
            format!("Elapsed: {}s", session.elapsed_secs(now)),
        ],
        (Phase::Idle, Some(ended_at)) => vec![
            format!(
                "Game finished at: {}",
                format_local_time(ended_at, offset)
            ),
            format!("Player: {}", session.player_name),
            format!("Mode: {}", session.mode),
            format!("Elapsed: {}s", session.elapsed_secs(now)),
            "You can start a new game.".to_string(),
        ],
        (Phase::Idle, None) => Vec::new(),
    }
}

pub(crate) struct GameView {
    machine: GameMachine,
    picker: Option<RandomCellPicker>,
    notice: Option<GameError>,
    scheduled: Option<Schedule>,
    _reveal_timer: Option<Interval>,
    _completion_timer: Option<Timeout>,
    init_settings: GameProps,
}

impl GameView {
    fn start_game(&mut self) -> bool {
        match self.machine.start(utc_now()) {
            Ok(token) => {
                let seed = session_seed(self.init_settings.seed, token);
                log::debug!("session {:?} seed: {}", token, seed);
                self.picker = Some(RandomCellPicker::new(seed));
                self.notice = None;
                true
            }
            Err(err) if err.is_user_facing() => {
                log::debug!("start refused: {}", err);
                self.notice = Some(err);
                true
            }
            Err(err) => {
                log::debug!("start ignored: {}", err);
                false
            }
        }
    }

    fn reveal_next(&mut self, token: SessionToken) -> bool {
        let Some(picker) = self.picker.as_mut() else {
            log::warn!("reveal tick without a picker");
            return false;
        };

        match self.machine.tick(token, picker) {
            Ok(outcome) => {
                log::trace!("tick: {:?}", outcome);
                true
            }
            Err(err) => {
                log::debug!("reveal tick dropped: {}", err);
                false
            }
        }
    }

    fn finish_game(&mut self, token: SessionToken) -> bool {
        match self.machine.complete(token, utc_now()) {
            Ok(summary) => {
                match serde_json::to_string(&summary) {
                    Ok(json) => log::info!("Game finished: {}", json),
                    Err(err) => log::error!("failed to encode summary: {}", err),
                }
                self.picker = None;
                true
            }
            Err(err) => {
                log::debug!("completion dropped: {}", err);
                false
            }
        }
    }

    /// Makes the live gloo timers match what the machine currently asks for.
    ///
    /// Replacing a handle drops the old one, which cancels its callback.
    fn sync_timers(&mut self, ctx: &Context<Self>) {
        let wanted = self.machine.schedule();
        if self.scheduled == wanted {
            return;
        }
        log::debug!("timers: {:?} -> {:?}", self.scheduled, wanted);

        self.scheduled = wanted;
        self._reveal_timer = None;
        self._completion_timer = None;

        let link = ctx.link().clone();
        match wanted {
            None => {}
            Some(Schedule::Repeating { token, interval_ms }) => {
                self._reveal_timer = Some(Interval::new(interval_ms, move || {
                    link.send_message(Msg::RevealTick(token))
                }));
            }
            Some(Schedule::Once { token, delay_ms }) => {
                self._completion_timer = Some(Timeout::new(delay_ms, move || {
                    link.send_message(Msg::CompletionElapsed(token))
                }));
            }
        }
    }

    fn view_notice(&self) -> Html {
        match self.notice {
            Some(err) => html! { <p class="notice" role="alert">{err.to_string()}</p> },
            None => html! {},
        }
    }

    fn view_info(&self) -> Html {
        let lines = info_lines(&self.machine, utc_now(), local_offset());
        if lines.is_empty() {
            return html! {};
        }

        html! {
            <div>
                { for lines.into_iter().map(|line| html! { <div>{line}</div> }) }
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            machine: GameMachine::default(),
            picker: None,
            notice: None,
            scheduled: None,
            _reveal_timer: None,
            _completion_timer: None,
            init_settings: ctx.props().clone(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            SelectMode(mode) => {
                log::debug!("select mode: {}", mode);
                self.machine.set_mode(mode)
            }
            EditName(name) => {
                let cleared = self.notice.take().is_some();
                self.machine.set_player_name(name) || cleared
            }
            Start => self.start_game(),
            RevealTick(token) => self.reveal_next(token),
            CompletionElapsed(token) => self.finish_game(token),
        };

        self.sync_timers(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let locked = self.machine.is_locked();
        let current_mode = self.machine.mode();
        let side = self
            .machine
            .grid()
            .map_or_else(|| current_mode.side(), |grid| grid.side());
        let cells = self.machine.grid().cloned();

        let cb_mode = ctx.link().batch_callback(|e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match value.parse::<Mode>() {
                Ok(mode) => Some(SelectMode(mode)),
                Err(err) => {
                    log::warn!("{}", err);
                    None
                }
            }
        });
        let cb_name = ctx.link().callback(|e: InputEvent| {
            EditName(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let cb_start = ctx.link().callback(|_: MouseEvent| Start);

        html! {
            <div class="litgrid">
                <div>
                    <ClockView/>
                    <nav class="controls">
                        <span>
                            <label for="mode">{"Select the mode:"}</label>
                            <select id="mode" disabled={locked} onchange={cb_mode}>
                                {
                                    for Mode::ALL.into_iter().map(|mode| html! {
                                        <option value={mode.name()} selected={mode == current_mode}>
                                            {mode.label()}
                                        </option>
                                    })
                                }
                            </select>
                        </span>
                        <span>
                            <label for="player-name">{"Enter the name:"}</label>
                            <input
                                id="player-name"
                                type="text"
                                value={self.machine.player_name().to_owned()}
                                disabled={locked}
                                oninput={cb_name}
                            />
                        </span>
                        <span>
                            <button onclick={cb_start} disabled={locked}>{"Start game"}</button>
                        </span>
                    </nav>
                    { self.view_notice() }
                    <GridView {side} {cells}/>
                </div>
                <aside class="game-info">{ self.view_info() }</aside>
            </div>
        }
    }
}
