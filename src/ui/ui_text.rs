/// User-facing strings (ru-RU).
pub struct UiText {
    pub app_title: &'static str,
    pub search_hint: &'static str,
    pub search_empty: &'static str,
    pub search_loading: &'static str,
    pub favorites_button: &'static str,
    pub favorites_title: &'static str,
    pub favorites_empty: &'static str,
    pub favorite_add_tooltip: &'static str,
    pub favorite_remove_tooltip: &'static str,
    pub select_prompt: &'static str,
    pub chart_subtitle: &'static str,
    pub load_error: &'static str,
    pub retry_button: &'static str,
    pub clear_selection: &'static str,
    pub tooltip_price_label: &'static str,
    pub countdown_prefix: &'static str,
    pub hours_suffix: &'static str,
    pub minutes_suffix: &'static str,
    pub market_closed: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Московская биржа",
    search_hint: "Поиск акций...",
    search_empty: "Акции не найдены",
    search_loading: "Загрузка...",
    favorites_button: "★ Избранное",
    favorites_title: "Избранные акции",
    favorites_empty: "Нет избранных акций",
    favorite_add_tooltip: "Добавить в избранное",
    favorite_remove_tooltip: "Удалить из избранного",
    select_prompt: "Выберите акцию для отображения графика",
    chart_subtitle: "График цены акции",
    load_error: "Ошибка при загрузке данных",
    retry_button: "Повторить",
    clear_selection: "Сбросить выбор",
    tooltip_price_label: "Цена",
    countdown_prefix: "До закрытия биржи",
    hours_suffix: "ч",
    minutes_suffix: "м",
    market_closed: "Биржа закрыта",
};
