mod format;
mod model;
mod persistence;
mod storage;
mod store;
mod summary;

use web_sys::{InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::format::{format_percent, format_rupiah};
use crate::model::{is_valid_entry, Expense};
use crate::persistence::BudgetPersistence;
use crate::store::{TankAction, TankStore};
use crate::summary::TankSummary;

const RESET_PROMPT: &str =
    "Really wipe all data? Your income goes back to the factory setting.";

fn confirm_reset() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(RESET_PROMPT).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    show_settings: bool,
    on_reset: Callback<MouseEvent>,
    on_toggle_settings: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="flex justify-between items-center mb-8">
            <div>
                <h1 class="text-2xl font-bold text-white tracking-tighter flex items-center gap-2">
                    <span class="text-cyan-400">{ icon_droplets() }</span>
                    {"SALARY TANK"}
                </h1>
                <p class="text-[10px] text-gray-500 uppercase tracking-widest mt-1 flex items-center gap-1">
                    { icon_save() }
                    {"Auto-Saved"}
                </p>
            </div>
            <div class="flex gap-2">
                <button onclick={props.on_reset.clone()} title="Reset Data"
                    class="text-xs border border-red-900 text-red-700 px-3 py-1 rounded-full hover:bg-red-900/20 transition-colors">
                    { icon_rotate_ccw() }
                </button>
                <button onclick={props.on_toggle_settings.clone()}
                    class="text-xs border border-gray-800 px-3 py-1 rounded-full hover:bg-gray-900 transition-colors">
                    { if props.show_settings { "Close" } else { "Set Income" } }
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct IncomePanelProps {
    income: f64,
    on_change: Callback<String>,
}

#[function_component(IncomePanel)]
fn income_panel(props: &IncomePanelProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="mb-6 bg-neutral-900/50 border border-neutral-800 p-4 rounded-xl">
            <label class="text-xs text-gray-400 mb-2 block">{"Total Capacity (Salary/Income)"}</label>
            <input type="number" value={props.income.to_string()} oninput={oninput}
                class="w-full bg-black border border-gray-700 rounded-lg p-3 text-white focus:outline-none focus:border-cyan-500 transition-colors text-lg" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TankProps {
    summary: TankSummary,
}

#[function_component(Tank)]
fn tank(props: &TankProps) -> Html {
    let summary = &props.summary;
    let water_class = format!(
        "absolute bottom-0 left-0 right-0 transition-all duration-1000 ease-in-out bg-gradient-to-t {} z-10 flex items-start justify-center pt-4 overflow-hidden",
        summary.status.water_gradient()
    );

    html! {
        <div class="relative h-80 w-full border-2 border-neutral-800 rounded-3xl bg-neutral-900/30 overflow-hidden mb-8 shadow-2xl shadow-black">
            <div class="absolute top-0 left-4 w-2 h-full bg-white/5 z-20 rounded-full"></div>

            <div class={water_class} style={format!("height: {}%", summary.fill_percentage)}>
                <div class="absolute top-0 w-[200%] h-8 bg-white/10 animate-pulse rounded-[100%] blur-xl -translate-y-1/2"></div>
                {
                    if summary.has_bubbles() {
                        html! {
                            <>
                                <div class="absolute bottom-10 left-1/4 w-2 h-2 bg-white/20 rounded-full animate-bounce"></div>
                                <div class="absolute bottom-20 left-3/4 w-3 h-3 bg-white/10 rounded-full animate-bounce"></div>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="absolute inset-0 z-30 flex flex-col items-center justify-center pointer-events-none mix-blend-difference">
                <span class="text-5xl font-black text-white tracking-tighter">{ format_percent(summary.fill_percentage) }</span>
                <span class="text-sm font-medium text-gray-300 mt-2 uppercase tracking-widest text-center px-4">
                    { format_rupiah(summary.current_balance) }
                </span>
            </div>

            {
                if summary.is_low() {
                    html! {
                        <div class="absolute top-4 right-4 z-30 animate-pulse text-red-500">{ icon_alert_triangle() }</div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddExpenseFormProps {
    on_add: Callback<(String, String)>,
}

#[function_component(AddExpenseForm)]
fn add_expense_form(props: &AddExpenseFormProps) -> Html {
    let name = use_state(|| "".to_string());
    let amount = use_state(|| "".to_string());

    let onsubmit = {
        let name = name.clone();
        let amount = amount.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !is_valid_entry(&name, &amount) {
                return;
            }
            on_add.emit(((*name).clone(), (*amount).clone()));
            name.set("".to_string());
            amount.set("".to_string());
        })
    };

    html! {
        <form onsubmit={onsubmit} class="flex gap-2">
            <input type="text" placeholder="Leak name" value={(*name).clone()} oninput={{
                let name = name.clone();
                Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                })
            }} class="flex-1 bg-neutral-900 border border-neutral-800 rounded-lg p-3 text-sm focus:border-cyan-500 focus:outline-none text-white placeholder-gray-600" />
            <input type="number" min="0" placeholder="Rp" value={(*amount).clone()} oninput={{
                let amount = amount.clone();
                Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    amount.set(input.value());
                })
            }} class="w-24 bg-neutral-900 border border-neutral-800 rounded-lg p-3 text-sm focus:border-cyan-500 focus:outline-none text-white placeholder-gray-600" />
            <button type="submit" class="bg-gray-100 hover:bg-white text-black p-3 rounded-lg transition-colors">
                { icon_plus() }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseRowProps {
    expense: Expense,
    on_toggle: Callback<i64>,
    on_delete: Callback<i64>,
}

#[function_component(ExpenseRow)]
fn expense_row(props: &ExpenseRowProps) -> Html {
    let expense = &props.expense;
    let id = expense.id;
    let on_toggle = props.on_toggle.clone();
    let on_delete = props.on_delete.clone();

    let (card_class, toggle_class, title_class, tag_class, tag, toggle_title) = if expense.is_patched {
        (
            "bg-neutral-900/30 border-neutral-800 opacity-60",
            "bg-green-500/10 text-green-500 hover:bg-green-500/20",
            "text-gray-500 line-through",
            "text-green-600 bg-green-900/10",
            "SAFE",
            "Reopen this leak",
        )
    } else {
        (
            "bg-neutral-900 border-red-900/30 hover:border-red-500/50",
            "bg-neutral-800 text-gray-400 hover:bg-cyan-500 hover:text-black",
            "text-white",
            "text-red-500 bg-red-900/10",
            "LEAK",
            "Patch this leak",
        )
    };

    html! {
        <div class={format!("group relative overflow-hidden rounded-xl border transition-all duration-300 {}", card_class)}>
            <div class="p-4 flex justify-between items-center relative z-10">
                <div class="flex items-center gap-3">
                    <button title={toggle_title} onclick={Callback::from(move |_| on_toggle.emit(id))}
                        class={format!("p-2 rounded-lg transition-all {}", toggle_class)}>
                        { icon_wrench() }
                    </button>
                    <div>
                        <h3 class={format!("font-medium {}", title_class)}>{ expense.name.clone() }</h3>
                        <p class="text-xs text-gray-500">{ format_rupiah(expense.amount) }</p>
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <div class={format!("text-[10px] font-bold px-2 py-1 rounded {}", tag_class)}>{ tag }</div>
                    <button onclick={Callback::from(move |_| on_delete.emit(id))}
                        class="text-gray-700 hover:text-red-500 transition-colors">
                        { icon_trash() }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let tank = use_reducer(|| TankStore::load(BudgetPersistence::new(storage::open_default())));
    let show_settings = use_state(|| false);
    let summary = tank.summary();
    let state = tank.state();

    let on_reset = {
        let tank = tank.clone();
        Callback::from(move |_| {
            if confirm_reset() {
                tank.dispatch(TankAction::Reset);
            }
        })
    };
    let on_toggle_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(!*show_settings))
    };
    let on_income = {
        let tank = tank.clone();
        Callback::from(move |text: String| tank.dispatch(TankAction::SetIncome(text)))
    };
    let on_add = {
        let tank = tank.clone();
        Callback::from(move |(name, amount): (String, String)| {
            tank.dispatch(TankAction::AddExpense { name, amount })
        })
    };
    let on_toggle = {
        let tank = tank.clone();
        Callback::from(move |id: i64| tank.dispatch(TankAction::TogglePatch(id)))
    };
    let on_delete = {
        let tank = tank.clone();
        Callback::from(move |id: i64| tank.dispatch(TankAction::DeleteExpense(id)))
    };

    let balance_class = if summary.current_balance < 0.0 {
        "font-bold text-red-500"
    } else {
        "font-bold text-white"
    };

    html! {
        <div class="min-h-screen bg-black text-gray-200 font-sans overflow-x-hidden">
            <div class="p-6 max-w-md mx-auto relative z-10">
                <Header show_settings={*show_settings} on_reset={on_reset} on_toggle_settings={on_toggle_settings} />

                {
                    if *show_settings {
                        html! { <IncomePanel income={state.income} on_change={on_income} /> }
                    } else {
                        html! {}
                    }
                }

                <Tank summary={summary} />

                <div class="mb-8 p-3 rounded-lg bg-neutral-900 border-l-4 border-l-cyan-500 border border-neutral-800">
                    <p class="text-sm italic text-gray-400">{ format!("\"{}\"", summary.status.message()) }</p>
                </div>

                <div class="space-y-6">
                    <div class="flex justify-between items-end">
                        <h2 class="text-lg font-bold text-white flex items-center gap-2">
                            <span class="text-red-500">{ icon_waves() }</span>
                            {"Leak List"}
                        </h2>
                        <span class="text-xs text-red-400">{ format!("Total Leaks: {}", format_rupiah(summary.total_leaks)) }</span>
                    </div>

                    <AddExpenseForm on_add={on_add} />

                    <div class="space-y-3">
                        {
                            if state.expenses.is_empty() {
                                html! {
                                    <div class="text-center py-8 text-gray-600 text-sm border border-dashed border-gray-800 rounded-xl">
                                        {"No leaks yet? Yeah, right. Put them in here."}
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        { for state.expenses.iter().map(|expense| html! {
                            <ExpenseRow
                                key={expense.id.to_string()}
                                expense={expense.clone()}
                                on_toggle={on_toggle.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }) }
                    </div>

                    <div class="mt-12 pt-6 border-t border-neutral-800 text-center pb-8">
                        <div class="grid grid-cols-2 gap-4">
                            <div class="p-4 bg-neutral-900 rounded-lg">
                                <div class="text-gray-500 text-xs mb-1 flex justify-center items-center gap-1">{ icon_trending_up() }{"Potential Savings"}</div>
                                <div class="text-green-500 font-bold">{ format_rupiah(summary.total_saved) }</div>
                            </div>
                            <div class="p-4 bg-neutral-900 rounded-lg">
                                <div class="text-gray-500 text-xs mb-1 flex justify-center items-center gap-1">{ icon_dollar_sign() }{"Remaining"}</div>
                                <div class={balance_class}>{ format_rupiah(summary.current_balance) }</div>
                            </div>
                        </div>
                        <p class="text-[10px] text-gray-700 mt-6">
                            {"*Data is stored in this browser only. Don't use it on a shared computer."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_droplets() -> Html {
    icon_base("M12 2.7l5.7 5.7a8 8 0 11-11.4 0z")
}
fn icon_save() -> Html {
    icon_base("M19 21H5a2 2 0 01-2-2V5a2 2 0 012-2h11l5 5v11a2 2 0 01-2 2zM17 21v-8H7v8M7 3v5h8")
}
fn icon_rotate_ccw() -> Html {
    icon_base("M1 4v6h6M3.51 15a9 9 0 102.13-9.36L1 10")
}
fn icon_alert_triangle() -> Html {
    icon_base("M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0zM12 9v4M12 17h.01")
}
fn icon_waves() -> Html {
    icon_base("M2 6c2 0 2 2 4 2s2-2 4-2 2 2 4 2 2-2 4-2 2 2 4 2M2 12c2 0 2 2 4 2s2-2 4-2 2 2 4 2 2-2 4-2 2 2 4 2M2 18c2 0 2 2 4 2s2-2 4-2 2 2 4 2 2-2 4-2 2 2 4 2")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
fn icon_wrench() -> Html {
    icon_base("M14.7 6.3a1 1 0 000 1.4l1.6 1.6a1 1 0 001.4 0l3.77-3.77a6 6 0 01-7.94 7.94l-6.91 6.91a2.12 2.12 0 01-3-3l6.91-6.91a6 6 0 017.94-7.94l-3.76 3.76z")
}
fn icon_trash() -> Html {
    icon_base("M3 6h18M19 6v14a2 2 0 01-2 2H7a2 2 0 01-2-2V6m3 0V4a2 2 0 012-2h4a2 2 0 012 2v2")
}
fn icon_trending_up() -> Html {
    icon_base("M23 6l-9.5 9.5-5-5L1 18M17 6h6v6")
}
fn icon_dollar_sign() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
