use crate::celebrate::Celebration;
use crate::phrases::{self, SourceError};
use crate::utils::*;
use bingo_core as bingo;
use clap::Args;
use yew::prelude::*;

const RESET_PROMPT: &str = "Are you sure you want to reset the board? This will reshuffle everything.";
const ERROR_NOTICE: &str = "Error loading configuration.";
const LOADING_NOTICE: &str = "Loading…";

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Ready {
        state: bingo::BoardState,
        winning: bingo::WinningCells,
    },
    /// The phrase list could not be loaded. Terminal until the page is reloaded.
    Failed,
}

impl Phase {
    fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

#[derive(Debug)]
pub(crate) enum Msg {
    Toggle(usize),
    Reset,
    PhrasesLoaded(Result<Vec<String>, SourceError>),
}

fn cell_classes(checked: bool, winning: bool) -> Vec<&'static str> {
    let mut class = vec!["bingo-cell"];
    if checked {
        class.push("checked");
    }
    if winning {
        class.push("winning");
    }
    class
}

/// Staggers the entrance animation of the cells.
fn animation_delay(index: usize) -> String {
    format!("animation-delay: {:.2}s", index as f64 * 0.05)
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    text: AttrValue,
    checked: bool,
    winning: bool,
    callback: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        text,
        checked,
        winning,
        callback,
    } = props.clone();

    let class = classes!(cell_classes(checked, winning));
    let style = animation_delay(index);
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <div {class} {style} data-index={index.to_string()} {onclick}>{text}</div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Where to fetch the phrase list from
    #[arg(long, default_value = phrases::DEFAULT_URL)]
    pub phrases: String,
}

pub(crate) struct BoardView {
    manager: bingo::BoardManager<LocalStore>,
    phase: Phase,
}

impl BoardView {
    fn load_phrases(ctx: &Context<Self>) {
        let url = ctx.props().phrases.clone();
        ctx.link()
            .send_future(async move { Msg::PhrasesLoaded(phrases::fetch_phrases(&url).await) });
    }

    fn toggle(&mut self, index: usize) -> bool {
        let Phase::Ready { state, winning } = &mut self.phase else {
            return false;
        };

        match self.manager.toggle(state, index) {
            Ok(outcome) => {
                if outcome.celebrates() {
                    log::info!(
                        "bingo: {:?}",
                        bingo::winning_lines(&state.checked_grid())
                    );
                    Celebration::default().fire();
                }
                *winning = outcome.winning;
                true
            }
            Err(err) => {
                log::error!("Rejected toggle: {}", err);
                false
            }
        }
    }

    fn reset(&mut self, ctx: &Context<Self>) -> bool {
        if !self.phase.is_ready() || !gloo::dialogs::confirm(RESET_PROMPT) {
            return false;
        }

        self.manager.reset();
        self.phase = Phase::Loading;
        Self::load_phrases(ctx);
        true
    }

    fn deal(&mut self, ctx: &Context<Self>, phrases: &[String]) {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let mut state = self
            .manager
            .initialize_from(phrases, bingo::RandomDealer::new(seed));
        let (winning, _) = state.reconcile_victory(bingo::Trigger::Restore);
        self.phase = Phase::Ready { state, winning };
    }

    fn view_grid(&self, ctx: &Context<Self>) -> Html {
        match &self.phase {
            Phase::Loading => html! { <div class="loader">{LOADING_NOTICE}</div> },
            Phase::Failed => html! { <div class="loader">{ERROR_NOTICE}</div> },
            Phase::Ready { state, winning } => {
                let callback = ctx.link().callback(Msg::Toggle);
                html! {
                    <div id="bingo-grid" class="bingo-grid">
                        {
                            for state.cells().iter().enumerate().map(|(index, cell)| html! {
                                <CellView
                                    key={index}
                                    {index}
                                    text={AttrValue::from(cell.text.clone())}
                                    checked={cell.checked}
                                    winning={winning.contains_index(index)}
                                    callback={callback.clone()}
                                />
                            })
                        }
                    </div>
                }
            }
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut manager = bingo::BoardManager::new(LocalStore);
        let phase = match manager.restore() {
            Some((state, winning)) => Phase::Ready { state, winning },
            None => {
                Self::load_phrases(ctx);
                Phase::Loading
            }
        };
        Self { manager, phase }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Toggle(index) => self.toggle(index),
            Reset => self.reset(ctx),
            PhrasesLoaded(Ok(phrases)) => {
                self.deal(ctx, &phrases);
                true
            }
            PhrasesLoaded(Err(err)) => {
                log::error!("Failed to load phrases: {}", err);
                self.phase = Phase::Failed;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="bingo">
                { self.view_grid(ctx) }
                <button id="reset-btn" class="reset" onclick={cb_reset} disabled={!self.phase.is_ready()}>
                    {"Reset board"}
                </button>
            </div>
        }
    }
}
