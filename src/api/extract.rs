// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema-validated JSON body extractor.

use axum::{
    Json,
    extract::{FromRef, FromRequest, Request, rejection::JsonRejection}
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{ValidationErrorFormat, ValidationRejection};

/// JSON body that passed both deserialization and `validator` constraints.
///
/// The handler body only runs when the request satisfies `T`'s schema;
/// otherwise the request is answered with a [`ValidationRejection`] in the
/// format selected by the router state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    ValidationErrorFormat: FromRef<S>
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = ValidationErrorFormat::from_ref(state);

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| malformed(format, rejection))?;

        value
            .validate()
            .map_err(|errors| ValidationRejection::invalid(format, &errors))?;

        Ok(Self(value))
    }
}

fn malformed(format: ValidationErrorFormat, rejection: JsonRejection) -> ValidationRejection {
    ValidationRejection::malformed(format, rejection.status(), rejection.body_text())
}
