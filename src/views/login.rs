pub fn login_ui() -> String {
    r#"<div class="login-page">
<div class="login-title"><h2>Billed</h2></div>
<form class="form-signin" data-testid="form-employee">
<h2 class="h3 mb-3 font-weight-normal">Employé</h2>
<label for="inputEmail" class="sr-only">Votre email</label>
<input type="email" data-testid="employee-email-input" class="form-control" placeholder="johndoe@email.com" required autofocus>
<label for="inputPassword" class="sr-only">Mot de passe</label>
<input type="password" data-testid="employee-password-input" class="form-control" placeholder="******" required>
<button class="btn btn-lg btn-primary btn-block" data-testid="employee-login-button" type="submit">Se connecter</button>
</form>
</div>"#
        .to_string()
}
