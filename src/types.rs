use std::fmt;

/// Which external compiler turns GLSL into SPIR-V.
///
/// - `GlslangValidator`: the Khronos reference compiler (`glslangValidator -V`).
/// - `Glslc`: Google's shaderc front end, selected with `use_google_spirv = true`.
///   It adds features such as `#include` preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerChoice {
    GlslangValidator,
    Glslc,
}

impl CompilerChoice {
    /// Map the `use_google_spirv` flag onto a compiler.
    pub fn from_use_google_spirv(use_google: bool) -> Self {
        if use_google {
            CompilerChoice::Glslc
        } else {
            CompilerChoice::GlslangValidator
        }
    }

    /// Arguments placed between the executable and the source file name.
    pub fn leading_args(self) -> &'static [&'static str] {
        match self {
            CompilerChoice::GlslangValidator => &["-V"],
            CompilerChoice::Glslc => &[],
        }
    }
}

impl fmt::Display for CompilerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerChoice::GlslangValidator => f.write_str("glslangValidator"),
            CompilerChoice::Glslc => f.write_str("glslc"),
        }
    }
}

/// Pipeline stage a source extension is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    Compute,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 4] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Geometry,
        ShaderStage::Compute,
    ];

    /// Config key holding this stage's file extension.
    pub fn config_key(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_ext",
            ShaderStage::Fragment => "fs_ext",
            ShaderStage::Geometry => "gs_ext",
            ShaderStage::Compute => "cs_ext",
        }
    }
}
