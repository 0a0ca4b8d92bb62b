use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).orange
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).purple
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).comment
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> egui::RichText {
        egui::RichText::new(content).color(self.purple(ctx)).strong()
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl Palette {
    //https://draculatheme.com/contribute
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(0xbd, 0x93, 0xf9),
            cyan: Color32::from_rgb(0x8b, 0xe9, 0xfd),
            background_darker: Color32::from_rgb(0x19, 0x1a, 0x21),
            background_dark: Color32::from_rgb(0x21, 0x22, 0x2c),
            background_light: Color32::from_rgb(0x34, 0x37, 0x46),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            foreground: Color32::from_rgb(0x28, 0x2a, 0x36),
            selection: Color32::from_rgb(0xc8, 0xc8, 0xdc),
            comment: Color32::from_rgb(0x6c, 0x76, 0x96),
            red: Color32::from_rgb(0xc8, 0x3c, 0x3c),
            orange: Color32::from_rgb(0xc8, 0x78, 0x28),
            green: Color32::from_rgb(0x32, 0x96, 0x50),
            purple: Color32::from_rgb(0x82, 0x5a, 0xc8),
            cyan: Color32::from_rgb(0x28, 0x82, 0xaa),
            background_darker: Color32::from_rgb(0xeb, 0xeb, 0xe6),
            background_dark: Color32::from_rgb(0xf0, 0xf0, 0xea),
            background_light: Color32::from_rgb(0xff, 0xff, 0xfa),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: palette.foreground, ..base.fg_stroke },
        ..base
    };

    let mut widgets = default.widgets.clone();
    widgets.noninteractive =
        widget(default.widgets.noninteractive, palette.background, palette.background_dark);
    widgets.inactive =
        widget(default.widgets.inactive, palette.background_light, palette.background_dark);
    widgets.hovered = widget(default.widgets.hovered, palette.selection, palette.cyan);
    widgets.active = widget(default.widgets.active, palette.selection, palette.cyan);
    widgets.open = widget(default.widgets.open, palette.background_dark, palette.purple);

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets,
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.cyan,
            faint_bg_color: palette.background_light,
            extreme_bg_color: palette.background_darker,
            code_bg_color: palette.background_dark,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_shadow: Shadow { color: palette.background_darker, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_light, ..default.window_stroke },
            panel_fill: palette.background_dark,
            ..default
        },
    );
}
