use crate::options::core::traits::Settings;
use crate::{algebra::*, options::core::SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the MOSEK options resolver, implementing the
/// [`Settings`](crate::options::core::traits::Settings) trait

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverSettings<T: FloatT> {
    ///divisor mapping the options vector violation tolerance
    ///to MSK_DPAR_INTPNT_TOL_PFEAS.  The default makes the MATPOWER
    ///default violation tolerance match MOSEK's default feasibility tolerance
    #[builder(default = "(500.).as_T()")]
    pub violation_scale: T,

    ///prefix of hook names requested through the options vector
    #[builder(default = r#""mosek_user_options_".to_string()"#)]
    pub hook_prefix: String,

    ///print resolved options
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for ResolverSettings<T>
where
    T: FloatT,
{
    fn default() -> ResolverSettings<T> {
        ResolverSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> Settings<T> for ResolverSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    fn validate(&self) -> Result<(), SettingsError> {
        validate_violation_scale(self.violation_scale)?;
        validate_hook_prefix(&self.hook_prefix)?;
        Ok(())
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ResolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ResolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> ResolverSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that any explicitly specified fields are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(violation_scale) = self.violation_scale {
            validate_violation_scale(violation_scale)?;
        }
        if let Some(ref hook_prefix) = self.hook_prefix {
            validate_hook_prefix(hook_prefix)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_violation_scale<T: FloatT>(violation_scale: T) -> Result<(), SettingsError> {
    if violation_scale.is_finite() && violation_scale > T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("violation_scale"))
    }
}

fn validate_hook_prefix(hook_prefix: &str) -> Result<(), SettingsError> {
    if hook_prefix.is_empty() {
        Err(SettingsError::BadFieldValue("hook_prefix"))
    } else {
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = ResolverSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings.violation_scale, 500.);
    assert_eq!(settings.hook_prefix, "mosek_user_options_");

    // fail on bad scale values
    assert!(ResolverSettingsBuilder::<f64>::default()
        .violation_scale(0.)
        .build()
        .is_err());
    assert!(ResolverSettingsBuilder::<f64>::default()
        .violation_scale(f64::NAN)
        .build()
        .is_err());

    // fail on empty hook prefix
    assert!(ResolverSettingsBuilder::<f64>::default()
        .hook_prefix(String::new())
        .build()
        .is_err());

    // directly construct a bad ResolverSettings and manually check
    let settings = ResolverSettings::<f64> {
        violation_scale: -1.,
        ..ResolverSettings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("violation_scale"))
    ));
}
