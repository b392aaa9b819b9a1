use std::collections::BTreeMap;

string_enum! {
    pub enum SecuritySchemeType {
        UserPassword = "userPassword",
        ApiKey = "apiKey",
        X509 = "X509",
        SymmetricEncryption = "symmetricEncryption",
        AsymmetricEncryption = "asymmetricEncryption",
        HttpApiKey = "httpApiKey",
        Http = "http",
        OAuth2 = "oauth2",
        OpenIdConnect = "openIdConnect",
        Plain = "plain",
        ScramSha256 = "scramSha256",
        ScramSha512 = "scramSha512",
        Gssapi = "gssapi",
    }
}

string_enum! {
    /// Where an API key is carried.
    pub enum SecuritySchemeLocation {
        User = "user",
        Password = "password",
        Query = "query",
        Header = "header",
        Cookie = "cookie",
    }
}

/// Scheme name to the scopes it requires (empty unless OAuth2 / OpenID Connect).
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

shape! {
    pub struct SecurityScheme {
        "type" => param_type: SecuritySchemeType,
        "description" => description: Option<String>,
        /// Header, query or cookie parameter name. `httpApiKey` only.
        "name" => name: Option<String>,
        "in" => param_in: Option<SecuritySchemeLocation>,
        /// HTTP authorization scheme (RFC 7235). `http` only.
        "scheme" => scheme: Option<String>,
        "bearerFormat" => bearer_format: Option<String>,
        "flows" => flows: Option<OAuthFlows>,
        "openIdConnectUrl" => open_id_connect_url: Option<url::Url>,
    }
}

shape! {
    pub struct OAuthFlows {
        "implicit" => implicit: Option<OAuthFlow>,
        "password" => password: Option<OAuthFlow>,
        "clientCredentials" => client_credentials: Option<OAuthFlow>,
        "authorizationCode" => authorization_code: Option<OAuthFlow>,
    }
}

shape! {
    pub struct OAuthFlow {
        "authorizationUrl" => authorization_url: Option<url::Url>,
        "tokenUrl" => token_url: Option<url::Url>,
        "refreshUrl" => refresh_url: Option<url::Url>,
        /// Scope name to a short description.
        "scopes" => scopes: Option<BTreeMap<String, String>>,
    }
}
