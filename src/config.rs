//! Command line arguments. Every shading control can also come from a
//! `RELIEF_*` environment variable, which may be set in a `.env` file.

use relief::hillshading::ParameterSet;

#[derive(clap::Parser, Debug)]
#[command(author, version)]
#[command(name = "relief")]
#[command(about = "Relief-shade an elevation raster into a grayscale image.")]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Shade an elevation raster and save the result as a PNG.
    Render(Render),
}

#[derive(clap::Args, Debug)]
pub struct Render {
    /// Grayscale elevation raster. Brighter means higher.
    #[arg(value_name = "INPUT")]
    pub input: std::path::PathBuf,

    /// Where to write the shaded image.
    #[arg(long, short, default_value = "shaded.png")]
    pub output: std::path::PathBuf,

    #[command(flatten)]
    pub shading: ShadingArgs,

    /// How to run the shading pass.
    #[arg(long, value_enum, default_value_t = Strategy::Sequential)]
    pub strategy: Strategy,

    /// Number of frames to render with the `frame` strategy. The last one is
    /// saved.
    #[arg(long, default_value_t = 1)]
    pub frames: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShadingArgs {
    /// Light that reaches every pixel regardless of orientation.
    #[arg(long, env = "RELIEF_AMBIENT", default_value_t = 0.2, allow_negative_numbers = true)]
    pub ambient: f32,

    /// Weight of the diffuse (N·L) term.
    #[arg(long, env = "RELIEF_DIFFUSE", default_value_t = 0.0, allow_negative_numbers = true)]
    pub diffuse: f32,

    /// Weight of the specular term.
    #[arg(long, env = "RELIEF_SPECULAR", default_value_t = 1.0, allow_negative_numbers = true)]
    pub specular: f32,

    /// Vertical exaggeration applied before estimating normals.
    #[arg(long, env = "RELIEF_EXAGGERATION", default_value_t = 5.0, allow_negative_numbers = true)]
    pub exaggeration: f32,

    /// Horizontal light direction in degrees.
    #[arg(long, env = "RELIEF_AZIMUTH", default_value_t = 0.0, allow_negative_numbers = true)]
    pub azimuth: f32,

    /// Light angle above the horizon in degrees.
    #[arg(long, env = "RELIEF_ELEVATION", default_value_t = 45.0, allow_negative_numbers = true)]
    pub elevation_angle: f32,
}

impl ShadingArgs {
    pub fn to_parameters(&self) -> ParameterSet {
        ParameterSet::new(
            self.ambient,
            self.diffuse,
            self.specular,
            self.exaggeration,
            self.azimuth,
            self.elevation_angle,
        )
    }
}

/// Where and how the shading pass runs.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One pass over the whole image on the current thread.
    Sequential,
    /// One pass over the whole image, rows split across threads.
    Parallel,
    /// Continuous per-frame recomputation from a parameter snapshot.
    Frame,
}
