/// 인증 미들웨어 동작 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 401로 종료
    Required,
    /// 토큰이 있으면 검증해 사용자 정보를 넣고, 없거나 무효하면 그대로 진행
    Optional,
}
