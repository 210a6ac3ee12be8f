//! Counter tiles at the top of each role dashboard.

use leptos::prelude::*;
use workflow::dashboard::Tile;

use crate::state::ui::UiState;
use crate::util::i18n;

#[component]
pub fn StatTiles(#[prop(into)] tiles: Signal<Vec<Tile>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="stat-tiles">
            {move || {
                let lang = ui.get().language;
                tiles
                    .get()
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <div class="stat-tile" class:stat-tile--alert=tile.alert>
                                <span class="stat-tile__value">{tile.value}</span>
                                <span class="stat-tile__label">{i18n::tile_label(lang, tile.kind)}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
