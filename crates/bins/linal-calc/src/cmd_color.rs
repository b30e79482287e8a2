use base::{
    color::{Color, ColorDisplayMode},
    units::{Degrees, Radians},
};

/// Options of the `color` command.
#[derive(clap::Args, Debug, Clone)]
#[clap(group = clap::ArgGroup::new("input").required(true).args(["hsva", "rgba"]))]
pub struct ColorOptions {
    /// Hue, saturation, value and optional alpha. The hue accepts a unit
    /// suffix (`120deg`, `2.1 rad`), bare numbers are degrees.
    #[arg(long, num_args = 3..=4, value_names = ["H", "S", "V", "A"], allow_negative_numbers = true)]
    pub hsva: Option<Vec<String>>,

    /// Red, green, blue and optional alpha channels in [0, 1].
    #[arg(long, num_args = 3..=4, value_names = ["R", "G", "B", "A"])]
    pub rgba: Option<Vec<f32>>,

    /// How the color is printed.
    #[arg(long, value_enum, default_value_t = ColorDisplayMode::Rgba)]
    pub mode: ColorDisplayMode,
}

/// Error raised when the channels of a color cannot be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The hue is neither a number nor an angle.
    #[error(transparent)]
    Hue(#[from] base::error::Error),

    /// A channel is not a number.
    #[error("Invalid channel value '{0}'")]
    InvalidChannel(String),
}

/// Reads a hue; bare numbers are degrees.
pub fn parse_hue(s: &str) -> Result<Radians, ColorError> {
    match s.trim().parse::<f32>() {
        Ok(deg) => Ok(Degrees::new(deg).into()),
        Err(_) => Ok(s.parse::<Radians>()?),
    }
}

/// Builds the color described by the options.
pub fn read_color(opts: &ColorOptions) -> Result<Color, ColorError> {
    if let Some(hsva) = &opts.hsva {
        let hue = parse_hue(&hsva[0])?;
        let channels = hsva[1..]
            .iter()
            .map(|s| s.trim().parse::<f32>().map_err(|_| ColorError::InvalidChannel(s.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        let alpha = channels.get(2).copied().unwrap_or(1.0);
        return Ok(Color::from_hsva(hue, channels[0], channels[1], alpha));
    }
    let rgba = opts.rgba.as_deref().unwrap_or(&[]);
    let mut color = Color::BLACK;
    for (i, c) in rgba.iter().take(4).enumerate() {
        color[i] = *c;
    }
    Ok(color)
}

/// Renders the color described by the options.
pub fn evaluate(opts: &ColorOptions) -> Result<String, ColorError> {
    let color = read_color(opts)?;
    log::debug!("color {:?} in mode {}", color, opts.mode);
    Ok(color.display(opts.mode).to_string())
}
