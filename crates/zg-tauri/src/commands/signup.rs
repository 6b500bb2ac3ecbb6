//! Signup-related Tauri commands
//! 회원가입 관련 Tauri 명령

use tauri::State;
use tracing::{info_span, Instrument};
use zg_core::registration::{signup_field_specs, FieldSpec, SignupField};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::SignupFormDto;

fn form_dto(runtime: &AppRuntime) -> SignupFormDto {
    let session = runtime.signup_session();
    SignupFormDto::from_parts(&session.snapshot(), session.validation(), session.status())
}

/// Current form state with derived validation flags
/// 파생된 검증 플래그를 포함한 현재 폼 상태
#[tauri::command]
pub async fn get_signup_form(runtime: State<'_, AppRuntime>) -> Result<SignupFormDto, String> {
    Ok(form_dto(&runtime))
}

/// Store one raw input value and return the re-derived form state
/// 입력 값 하나를 저장하고 다시 파생된 폼 상태를 반환
///
/// The value is kept verbatim except for the phone number, whose setter
/// ignores values longer than 11 characters.
#[tauri::command]
pub async fn update_signup_field(
    runtime: State<'_, AppRuntime>,
    field: SignupField,
    value: String,
) -> Result<SignupFormDto, String> {
    let span = info_span!("command.signup.update_field");
    async {
        runtime.signup_session().update_field(field, value);
        Ok(form_dto(&runtime))
    }
    .instrument(span)
    .await
}

/// Native validation attributes for the webview inputs
/// 웹뷰 입력에 적용할 네이티브 검증 속성
#[tauri::command]
pub async fn get_signup_field_specs() -> Result<Vec<FieldSpec>, String> {
    Ok(signup_field_specs())
}

/// Submit the current draft to the registration endpoint
/// 현재 작성 중인 내용을 가입 엔드포인트로 제출
///
/// Always resolves `Ok`: failures are logged on the Rust side and the form
/// shows no error state. On success the webview receives a `navigate`
/// event for the login route.
#[tauri::command]
pub async fn submit_signup(runtime: State<'_, AppRuntime>) -> Result<(), String> {
    let span = info_span!("command.signup.submit");
    async {
        let uc = runtime.usecases().submit_registration();
        uc.execute().await;
        Ok(())
    }
    .instrument(span)
    .await
}
