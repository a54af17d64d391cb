/// Body proportions of the two vanilla player models.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ModelVariant {
    #[default]
    Steve,
    Alex,
}

/// Geometry that differs between the variants, as one data table per variant
/// rather than branches scattered through the builder. Every part not listed
/// here is identical across variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantDims {
    /// Arm box width in atlas pixels. Also the width of the arm's front and
    /// back atlas faces; the side strips stay 4px regardless.
    pub arm_width: u32,
    pub arm_size: [f32; 3],
    pub sleeve_size: [f32; 3],
    pub right_arm_offset: [f32; 3],
    pub left_arm_offset: [f32; 3],
}

static STEVE_DIMS: VariantDims = VariantDims {
    arm_width: 4,
    arm_size: [4.0, 12.0, 4.0],
    sleeve_size: [4.5, 12.5, 4.5],
    right_arm_offset: [-6.0, 6.0, 0.0],
    left_arm_offset: [6.0, 6.0, 0.0],
};

static ALEX_DIMS: VariantDims = VariantDims {
    arm_width: 3,
    arm_size: [3.0, 12.0, 4.0],
    sleeve_size: [3.5, 12.5, 4.5],
    right_arm_offset: [-5.5, 6.0, 0.0],
    left_arm_offset: [5.5, 6.0, 0.0],
};

impl ModelVariant {
    pub const fn dims(self) -> &'static VariantDims {
        match self {
            ModelVariant::Steve => &STEVE_DIMS,
            ModelVariant::Alex => &ALEX_DIMS,
        }
    }

    pub const fn arm_width(self) -> u32 {
        self.dims().arm_width
    }
}
